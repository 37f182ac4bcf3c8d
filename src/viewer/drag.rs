// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning the magnified image,
//! including the small-movement threshold that decides whether the pointer
//! release afterwards still counts as a backdrop click.

use crate::config::defaults::DRAG_SUPPRESS_THRESHOLD_PX;
use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    active: bool,

    /// Position where the drag started
    start_pointer: Option<Point>,

    /// Image translation when the drag started
    start_translate: Option<Vector>,

    /// Whether the cumulative movement exceeded the click-suppression
    /// threshold
    moved_beyond_threshold: bool,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, pointer: Point, translate: Vector) {
        self.active = true;
        self.start_pointer = Some(pointer);
        self.start_translate = Some(translate);
        self.moved_beyond_threshold = false;
    }

    /// Stops the drag operation and clears the snapshot
    pub fn stop(&mut self) {
        self.active = false;
        self.start_pointer = None;
        self.start_translate = None;
        self.moved_beyond_threshold = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the drag moved far enough that the following pointer release
    /// must not be treated as a backdrop click.
    #[must_use]
    pub fn suppresses_backdrop_click(&self) -> bool {
        self.moved_beyond_threshold
    }

    /// Calculates the new translation for the current cursor position.
    ///
    /// Marks the drag as click-suppressing once the Manhattan distance from
    /// the start exceeds the threshold. Returns `None` when no drag is
    /// active.
    pub fn translate_for(&mut self, pointer: Point) -> Option<Vector> {
        if !self.active {
            return None;
        }

        let start = self.start_pointer?;
        let base = self.start_translate?;

        let delta_x = pointer.x - start.x;
        let delta_y = pointer.y - start.y;

        if delta_x.abs() + delta_y.abs() > DRAG_SUPPRESS_THRESHOLD_PX {
            self.moved_beyond_threshold = true;
        }

        Some(Vector::new(base.x + delta_x, base.y + delta_y))
    }
}
