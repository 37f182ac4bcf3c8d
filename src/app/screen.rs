// SPDX-License-Identifier: MPL-2.0
//! Top-level screens.

/// Which full-window surface is currently shown. The overlay is not a
/// screen; it stacks on top of whichever one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Gallery,
    Settings,
}
