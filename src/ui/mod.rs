// SPDX-License-Identifier: MPL-2.0
//! Widgets, styles and theming for the gallery and the overlay.

pub mod design_tokens;
pub mod overlay;
pub mod settings;
pub mod styles;
pub mod theming;

pub use theming::OverlayTheme;
