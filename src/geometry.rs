// SPDX-License-Identifier: MPL-2.0
//! Pure zoom/pan geometry for the overlay viewer.
//!
//! Everything here is a function of its inputs: no widget state, no window
//! handles. The viewer state machine feeds it the natural image size, the
//! window size and the current transform, and renders whatever comes back.
//! Keeping the math free of UI types beyond `Size`/`Vector` makes it
//! directly testable and shared between wheel zoom (anchored at the cursor)
//! and toolbar zoom (anchored at the viewport center).

use crate::config::defaults::{
    MIN_VIEWPORT_EXTENT, VIEWPORT_PADDING_X, VIEWPORT_PADDING_Y, ZOOM_NOOP_EPSILON,
};
use iced::{Size, Vector};

/// Inputs shared by every zoom computation for one session.
#[derive(Debug, Clone, Copy)]
pub struct ZoomContext {
    pub natural: Size,
    pub viewport: Size,
    pub min_scale: f32,
    pub max_scale: f32,
}

/// Returns the padded viewport: the window minus a fixed margin on each
/// axis, floored so tiny windows still leave something to render into.
#[must_use]
pub fn viewport_bounds(window: Size) -> Size {
    Size::new(
        (window.width - VIEWPORT_PADDING_X).max(MIN_VIEWPORT_EXTENT),
        (window.height - VIEWPORT_PADDING_Y).max(MIN_VIEWPORT_EXTENT),
    )
}

/// Computes the scale at which the image exactly fits the viewport without
/// ever upscaling past native resolution.
///
/// Returns 1.0 when the natural size is unknown (zero or negative), which
/// keeps a half-loaded session harmless.
#[must_use]
pub fn fit_scale(natural: Size, viewport: Size) -> f32 {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return 1.0;
    }

    (viewport.width / natural.width)
        .min(viewport.height / natural.height)
        .min(1.0)
}

/// Clamps a translation so the rendered image never leaves more than half
/// of its overflow outside the viewport on either axis.
///
/// When the rendered image is smaller than the viewport the allowed offset
/// collapses to zero and the image stays centered.
#[must_use]
pub fn clamp_translation(translate: Vector, scale: f32, natural: Size, viewport: Size) -> Vector {
    let max_x = ((natural.width * scale - viewport.width) / 2.0).max(0.0);
    let max_y = ((natural.height * scale - viewport.height) / 2.0).max(0.0);

    Vector::new(
        translate.x.clamp(-max_x, max_x),
        translate.y.clamp(-max_y, max_y),
    )
}

/// Applies a multiplicative zoom step while keeping the point under
/// `anchor` (an offset from the viewport center) visually fixed.
///
/// Returns `None` when the clamped scale change is negligible, so repeated
/// wheel events at a zoom boundary do not jitter the translation. The
/// returned translation is already clamped.
#[must_use]
pub fn zoom_around(
    ctx: &ZoomContext,
    prev_scale: f32,
    anchor: Vector,
    factor: f32,
    translate: Vector,
) -> Option<(f32, Vector)> {
    let next_scale = (prev_scale * factor).clamp(ctx.min_scale, ctx.max_scale);
    if (next_scale - prev_scale).abs() < ZOOM_NOOP_EPSILON {
        return None;
    }

    let ratio = next_scale / prev_scale;
    let moved = Vector::new(
        anchor.x - (anchor.x - translate.x) * ratio,
        anchor.y - (anchor.y - translate.y) * ratio,
    );

    Some((
        next_scale,
        clamp_translation(moved, next_scale, ctx.natural, ctx.viewport),
    ))
}
