// SPDX-License-Identifier: MPL-2.0
//! The viewer session state machine.
//!
//! A [`ViewerSession`] exists only while the overlay is up, owned as an
//! `Option` by the application so at most one can exist. It starts in
//! [`Phase::Opening`] while the image's natural size is being read and
//! becomes interactive in [`Phase::Open`]; closing is simply dropping it.
//!
//! All coordinate math is delegated to [`crate::geometry`]; this type owns
//! the scale/translate invariants (`min ≤ scale ≤ max`, translation always
//! clamped after every mutation) and the drag lifecycle.

use crate::config::defaults::{
    MAX_ZOOM_MULTIPLIER, RESET_TRANSLATE_TOLERANCE, SCALE_EPSILON,
};
use crate::geometry::{self, ZoomContext};
use crate::viewer::drag::DragState;
use iced::widget::image::Handle;
use iced::{Point, Rectangle, Size, Vector};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The image was requested but its natural size is not known yet.
    Opening,
    /// The natural size is known and the viewer is interactive.
    Open,
}

#[derive(Debug, Clone)]
pub struct ViewerSession {
    source: PathBuf,
    caption: String,
    handle: Handle,
    phase: Phase,
    natural: Size,
    scale: f32,
    fit_scale: f32,
    min_scale: f32,
    max_scale: f32,
    translate: Vector,
    drag: DragState,
}

impl ViewerSession {
    /// Creates a session in the `Opening` phase for the given image file.
    #[must_use]
    pub fn open(source: PathBuf, caption: String) -> Self {
        let handle = Handle::from_path(&source);
        Self {
            source,
            caption,
            handle,
            phase: Phase::Opening,
            natural: Size::ZERO,
            scale: 1.0,
            fit_scale: 1.0,
            min_scale: 1.0,
            max_scale: 1.0,
            translate: Vector::new(0.0, 0.0),
            drag: DragState::default(),
        }
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn fit_scale(&self) -> f32 {
        self.fit_scale
    }

    #[must_use]
    pub fn translate(&self) -> Vector {
        self.translate
    }

    /// Completes the `Opening` phase once the natural pixel size is known.
    ///
    /// Computes the fit/min/max scales for the current window, starts at the
    /// fit scale, centered. A repeated call while already open is ignored.
    pub fn loaded(&mut self, width: u32, height: u32, window: Size) {
        if self.phase != Phase::Opening {
            return;
        }

        self.natural = Size::new(width.max(1) as f32, height.max(1) as f32);
        self.phase = Phase::Open;
        self.refit(window, true);
    }

    /// Zooms by `factor` around `anchor`, an offset from the viewport
    /// center. Returns whether anything changed.
    pub fn zoom_around(&mut self, anchor: Vector, factor: f32, window: Size) -> bool {
        if self.phase != Phase::Open {
            return false;
        }

        let viewport = geometry::viewport_bounds(window);
        let ctx = ZoomContext {
            natural: self.natural,
            viewport,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        };

        match geometry::zoom_around(&ctx, self.scale, anchor, factor, self.translate) {
            Some((scale, translate)) => {
                self.scale = scale;
                self.translate = translate;
                true
            }
            None => false,
        }
    }

    /// Returns the view to the fit scale, centered. The "Fit" action.
    pub fn reset(&mut self) {
        if self.phase != Phase::Open {
            return;
        }

        self.scale = self.fit_scale;
        self.translate = Vector::new(0.0, 0.0);
    }

    /// Starts a drag. Only possible while zoomed in past the fit scale;
    /// at fit there is nothing to pan.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.is_pannable() {
            return false;
        }

        self.drag.start(pointer, self.translate);
        true
    }

    /// Pans to follow the cursor while a drag is active, keeping the
    /// translation clamped.
    pub fn drag_to(&mut self, pointer: Point, window: Size) {
        let Some(translate) = self.drag.translate_for(pointer) else {
            return;
        };

        let viewport = geometry::viewport_bounds(window);
        self.translate = geometry::clamp_translation(translate, self.scale, self.natural, viewport);
    }

    /// Ends the drag, keeping the translation where it is. Returns whether
    /// the movement was large enough that the pointer release must not be
    /// treated as a backdrop click.
    pub fn end_drag(&mut self) -> bool {
        let suppress_click = self.drag.suppresses_backdrop_click();
        self.drag.stop();
        suppress_click
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Recomputes the scale bounds for a new window size, clamping the
    /// current scale and translation into them. The zoom level is preserved
    /// where possible instead of snapping back to fit.
    pub fn resized(&mut self, window: Size) {
        if self.phase != Phase::Open {
            return;
        }

        self.refit(window, false);
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.is_open() && self.scale < self.max_scale - SCALE_EPSILON
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.is_open() && self.scale > self.min_scale + SCALE_EPSILON
    }

    /// Whether the view is already at the fit scale and centered, within a
    /// small tolerance. The "Fit" button is disabled in this state.
    #[must_use]
    pub fn is_at_fit(&self) -> bool {
        self.is_open()
            && (self.scale - self.fit_scale).abs() <= SCALE_EPSILON
            && self.translate.x.abs() <= RESET_TRANSLATE_TOLERANCE
            && self.translate.y.abs() <= RESET_TRANSLATE_TOLERANCE
    }

    /// Whether dragging is currently meaningful.
    #[must_use]
    pub fn is_pannable(&self) -> bool {
        self.is_open() && self.scale > self.fit_scale + SCALE_EPSILON
    }

    /// The on-screen rectangle of the rendered image: centered in the
    /// window, shifted by the translation, scaled. Zero-sized while the
    /// natural dimensions are unknown.
    #[must_use]
    pub fn rendered_bounds(&self, window: Size) -> Rectangle {
        let width = self.natural.width.max(0.0) * self.scale;
        let height = self.natural.height.max(0.0) * self.scale;
        let center_x = window.width / 2.0 + self.translate.x;
        let center_y = window.height / 2.0 + self.translate.y;

        Rectangle::new(
            Point::new(center_x - width / 2.0, center_y - height / 2.0),
            Size::new(width, height),
        )
    }

    fn refit(&mut self, window: Size, reset_view: bool) {
        let viewport = geometry::viewport_bounds(window);
        self.fit_scale = geometry::fit_scale(self.natural, viewport);
        self.min_scale = self.fit_scale;
        self.max_scale = self.fit_scale * MAX_ZOOM_MULTIPLIER;

        if reset_view {
            self.scale = self.fit_scale;
            self.translate = Vector::new(0.0, 0.0);
        } else {
            self.scale = self.scale.clamp(self.min_scale, self.max_scale);
        }

        self.translate =
            geometry::clamp_translation(self.translate, self.scale, self.natural, viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::ZOOM_STEP_FACTOR;
    use crate::test_utils::assert_abs_diff_eq;

    // 1296x896 window -> 1200x800 padded viewport.
    const WINDOW: Size = Size::new(1296.0, 896.0);

    fn open_session() -> ViewerSession {
        let mut session = ViewerSession::open(PathBuf::from("photo.png"), "photo".into());
        session.loaded(4000, 3000, WINDOW);
        session
    }

    #[test]
    fn loaded_computes_fit_and_centers() {
        let session = open_session();

        assert!(session.is_open());
        assert_abs_diff_eq!(session.fit_scale(), 0.266_666_7, epsilon = 1e-4);
        assert_abs_diff_eq!(session.scale(), session.fit_scale());
        assert_eq!(session.translate(), Vector::new(0.0, 0.0));
        assert!(session.is_at_fit());
        assert!(session.can_zoom_in());
        assert!(!session.can_zoom_out());
        assert!(!session.is_pannable());
    }

    #[test]
    fn loaded_twice_is_ignored() {
        let mut session = open_session();
        session.zoom_around(Vector::new(0.0, 0.0), 2.0, WINDOW);
        let scale = session.scale();

        session.loaded(10, 10, WINDOW);
        assert_abs_diff_eq!(session.scale(), scale);
    }

    #[test]
    fn opening_session_rejects_interaction() {
        let mut session = ViewerSession::open(PathBuf::from("photo.png"), "photo".into());

        assert!(!session.zoom_around(Vector::new(0.0, 0.0), 2.0, WINDOW));
        assert!(!session.begin_drag(Point::new(0.0, 0.0)));
        assert!(!session.is_at_fit());
        assert!(!session.can_zoom_in());
    }

    #[test]
    fn zoom_then_reset_returns_to_fit() {
        let mut session = open_session();

        assert!(session.zoom_around(Vector::new(100.0, 50.0), 2.0, WINDOW));
        assert!(!session.is_at_fit());
        assert!(session.is_pannable());

        session.reset();
        assert!(session.is_at_fit());
        assert_eq!(session.translate(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn reset_at_fit_is_a_no_op() {
        let mut session = open_session();
        assert!(session.is_at_fit());
        session.reset();
        assert!(session.is_at_fit());
        assert_abs_diff_eq!(session.scale(), session.fit_scale());
    }

    #[test]
    fn drag_requires_zoom_past_fit() {
        let mut session = open_session();
        assert!(!session.begin_drag(Point::new(10.0, 10.0)));

        session.zoom_around(Vector::new(0.0, 0.0), 4.0, WINDOW);
        assert!(session.begin_drag(Point::new(10.0, 10.0)));
        assert!(session.is_dragging());
    }

    #[test]
    fn drag_moves_and_clamps_translation() {
        let mut session = open_session();
        session.zoom_around(Vector::new(0.0, 0.0), 8.0, WINDOW);

        session.begin_drag(Point::new(0.0, 0.0));
        session.drag_to(Point::new(25.0, -40.0), WINDOW);
        let translate = session.translate();
        assert_abs_diff_eq!(translate.x, 25.0, epsilon = 1e-3);
        assert_abs_diff_eq!(translate.y, -40.0, epsilon = 1e-3);

        // A huge swing clamps at half the overflow.
        session.drag_to(Point::new(1e6, 1e6), WINDOW);
        let rendered = session.rendered_bounds(WINDOW);
        assert!(session.translate().x <= (rendered.width - 1200.0) / 2.0 + 1e-3);

        let suppress = session.end_drag();
        assert!(suppress);
        assert!(!session.is_dragging());
        // Translation survives the end of the drag.
        assert!(session.translate().x.abs() > 0.0);
    }

    #[test]
    fn end_drag_without_movement_does_not_suppress() {
        let mut session = open_session();
        session.zoom_around(Vector::new(0.0, 0.0), 4.0, WINDOW);
        session.begin_drag(Point::new(5.0, 5.0));
        session.drag_to(Point::new(5.5, 5.5), WINDOW);
        assert!(!session.end_drag());
    }

    #[test]
    fn resize_preserves_zoom_intent() {
        let mut session = open_session();
        session.zoom_around(Vector::new(0.0, 0.0), 2.0, WINDOW);
        let scale = session.scale();

        // A slightly smaller window keeps the same absolute scale.
        session.resized(Size::new(1196.0, 896.0));
        assert_abs_diff_eq!(session.scale(), scale, epsilon = 1e-5);

        // A drastically larger window raises the fit scale above the old
        // zoom, which pulls the scale up into the new valid range.
        session.resized(Size::new(5000.0, 4000.0));
        assert!(session.scale() >= session.fit_scale() - 1e-5);
        assert!(session.scale() <= session.fit_scale() * MAX_ZOOM_MULTIPLIER + 1e-5);
    }

    #[test]
    fn zoom_in_disables_at_max_scale() {
        let mut session = open_session();
        for _ in 0..64 {
            session.zoom_around(Vector::new(0.0, 0.0), ZOOM_STEP_FACTOR, WINDOW);
        }

        assert!(!session.can_zoom_in());
        assert!(session.can_zoom_out());
        assert_abs_diff_eq!(
            session.scale(),
            session.fit_scale() * MAX_ZOOM_MULTIPLIER,
            epsilon = 1e-3
        );
    }

    #[test]
    fn rendered_bounds_center_on_window() {
        let session = open_session();
        let bounds = session.rendered_bounds(WINDOW);

        assert_abs_diff_eq!(bounds.width, 4000.0 * session.scale(), epsilon = 1e-2);
        assert_abs_diff_eq!(
            bounds.x + bounds.width / 2.0,
            WINDOW.width / 2.0,
            epsilon = 1e-2
        );
    }

    #[test]
    fn rendered_bounds_are_empty_while_opening() {
        let session = ViewerSession::open(PathBuf::from("photo.png"), "photo".into());
        let bounds = session.rendered_bounds(WINDOW);
        assert_abs_diff_eq!(bounds.width, 0.0);
        assert!(!bounds.contains(Point::new(648.0, 448.0)));
    }
}
