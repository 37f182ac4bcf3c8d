// SPDX-License-Identifier: MPL-2.0
//! Centralized tunables for the gesture detector, the zoom geometry, and the
//! default overlay theme.
//!
//! Keeping every magic number here makes the relationships visible: the
//! maximum zoom is always expressed as a multiple of the fit scale, and the
//! viewport is always the window minus a fixed padding.

/// Two Ctrl presses within this window count as a trigger gesture.
pub const DOUBLE_PRESS_WINDOW_MS: u64 = 350;

/// Multiplicative step applied per wheel notch or toolbar click.
pub const ZOOM_STEP_FACTOR: f32 = 1.1;

/// The maximum scale is the fit scale times this multiplier.
pub const MAX_ZOOM_MULTIPLIER: f32 = 8.0;

/// Horizontal padding subtracted from the window to get the viewport.
pub const VIEWPORT_PADDING_X: f32 = 96.0;

/// Vertical padding subtracted from the window to get the viewport.
pub const VIEWPORT_PADDING_Y: f32 = 96.0;

/// The padded viewport never shrinks below this extent on either axis.
pub const MIN_VIEWPORT_EXTENT: f32 = 120.0;

/// Manhattan distance in pixels beyond which a drag suppresses the
/// backdrop click that follows pointer release.
pub const DRAG_SUPPRESS_THRESHOLD_PX: f32 = 2.0;

/// Tolerance used when comparing the current scale against its bounds,
/// e.g. for enabling/disabling the toolbar buttons.
pub const SCALE_EPSILON: f32 = 1e-4;

/// Scale changes smaller than this are treated as no-ops to avoid jitter
/// from repeated wheel events at a zoom boundary.
pub const ZOOM_NOOP_EPSILON: f32 = 1e-5;

/// Translation within this many pixels of zero counts as centered when
/// deciding whether the view is back at the fit position.
pub const RESET_TRANSLATE_TOLERANCE: f32 = 0.5;

// Default overlay theme, as CSS-style color strings. The settings layer
// falls back to these key by key when a stored entry is missing or fails
// to parse.
pub const DEFAULT_BUTTON_BG: &str = "rgba(255, 255, 255, 0.13)";
pub const DEFAULT_BUTTON_TEXT: &str = "rgba(255, 255, 255, 0.92)";
pub const DEFAULT_BUTTON_HOVER_BG: &str = "rgba(255, 255, 255, 0.22)";
pub const DEFAULT_BUTTON_HOVER_TEXT: &str = "#fff";
pub const DEFAULT_BUTTON_ACTIVE_BG: &str = "rgba(255, 255, 255, 0.1)";
pub const DEFAULT_BUTTON_DISABLED_OPACITY: f32 = 0.28;
pub const DEFAULT_CLOSE_BUTTON_BG: &str = "rgba(18, 18, 22, 0.68)";
pub const DEFAULT_CLOSE_BUTTON_TEXT: &str = "rgba(255, 255, 255, 0.75)";
pub const DEFAULT_CLOSE_BUTTON_HOVER_BG: &str = "rgba(255, 255, 255, 0.14)";
pub const DEFAULT_CLOSE_BUTTON_HOVER_TEXT: &str = "#fff";
