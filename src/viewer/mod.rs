// SPDX-License-Identifier: MPL-2.0
//! The overlay viewer: drag bookkeeping and the session state machine.

pub mod drag;
pub mod session;

pub use drag::DragState;
pub use session::{Phase, ViewerSession};
