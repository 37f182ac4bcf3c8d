// SPDX-License-Identifier: MPL-2.0
//! Trigger-gesture detection: a double press of the Ctrl key.
//!
//! The tracker keeps the last global cursor position and the gallery tile
//! currently under it, and decides whether a Ctrl press completes a double
//! press. Time is injected so the window logic is testable without sleeping.
//!
//! The press timestamp updates on every qualifying press, so three rapid
//! presses produce at most one trigger (from presses 2–3) and the third
//! press seeds the window for a subsequent double press.

use crate::config::defaults::DOUBLE_PRESS_WINDOW_MS;
use iced::Point;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct GestureTracker {
    last_press: Option<Instant>,
    modifier_held: bool,
    last_pointer: Point,
    hovered: Option<usize>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self {
            last_press: None,
            modifier_held: false,
            last_pointer: Point::ORIGIN,
            hovered: None,
        }
    }
}

impl GestureTracker {
    /// Records the most recent global cursor position.
    pub fn pointer_moved(&mut self, position: Point) {
        self.last_pointer = position;
    }

    /// The last known global cursor position, used as the hit-test fallback
    /// when no tile reported a hover.
    #[must_use]
    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    /// Marks a gallery tile as hovered. A non-owning index: the tile may
    /// disappear on rescan, so callers must re-validate before use.
    pub fn hover_entered(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Clears the hover, but only if it still refers to the given tile.
    /// Enter events for adjacent tiles can arrive before the exit event of
    /// the previous one.
    pub fn hover_left(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    /// Drops any hover reference, e.g. after the gallery was rescanned and
    /// indices no longer line up.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Registers a Ctrl key-down and returns whether it completes a double
    /// press.
    ///
    /// Presses that arrive while the key is still held are auto-repeat and
    /// are ignored entirely; they neither trigger nor move the baseline.
    pub fn register_press(&mut self, now: Instant) -> bool {
        if self.modifier_held {
            return false;
        }
        self.modifier_held = true;

        let elapsed = self.last_press.map(|previous| now.duration_since(previous));
        self.last_press = Some(now);

        matches!(elapsed, Some(delta) if delta <= Duration::from_millis(DOUBLE_PRESS_WINDOW_MS))
    }

    /// Re-arms the repeat filter once the key is released.
    pub fn release(&mut self) {
        self.modifier_held = false;
    }
}
