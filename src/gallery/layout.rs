// SPDX-License-Identifier: MPL-2.0
//! Grid arithmetic for the gallery.
//!
//! The grid is laid out by the widget tree, but the double-press trigger
//! needs a pure hit-test from a global cursor position to a tile index when
//! no hover event fired (e.g. the cursor has not moved since the last
//! rescan). [`GridLayout`] mirrors the widget layout exactly: fixed square
//! tiles, fixed spacing, fixed padding, under a fixed-height top bar.

use iced::Point;

/// Side length of a square gallery tile.
pub const TILE_SIZE: f32 = 160.0;

/// Gap between adjacent tiles, both axes.
pub const TILE_SPACING: f32 = 12.0;

/// Padding around the whole grid inside the scrollable.
pub const GRID_PADDING: f32 = 16.0;

/// Height of the bar above the scrollable grid.
pub const TOP_BAR_HEIGHT: f32 = 48.0;

#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    columns: usize,
}

impl GridLayout {
    /// Computes the column count for a given window width, matching how the
    /// row widgets wrap. Always at least one column.
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        let usable = width - 2.0 * GRID_PADDING;
        let columns = ((usable + TILE_SPACING) / (TILE_SIZE + TILE_SPACING)).floor();

        Self {
            columns: (columns as usize).max(1),
        }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Top-left corner of a tile in grid-content coordinates, before the
    /// top bar offset and scroll are applied.
    #[must_use]
    pub fn tile_origin(&self, index: usize) -> Point {
        let col = index % self.columns;
        let row = index / self.columns;
        let step = TILE_SIZE + TILE_SPACING;

        Point::new(
            GRID_PADDING + col as f32 * step,
            GRID_PADDING + row as f32 * step,
        )
    }

    /// Maps a window-space cursor position to the tile under it, if any.
    ///
    /// `scroll_offset` is the vertical offset of the scrollable holding the
    /// grid. Positions in the top bar, the padding or the gaps between
    /// tiles miss.
    #[must_use]
    pub fn hit_test(&self, cursor: Point, scroll_offset: f32, entry_count: usize) -> Option<usize> {
        if cursor.y < TOP_BAR_HEIGHT {
            return None;
        }

        let local_x = cursor.x - GRID_PADDING;
        let local_y = cursor.y - TOP_BAR_HEIGHT + scroll_offset - GRID_PADDING;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }

        let step = TILE_SIZE + TILE_SPACING;
        let col = (local_x / step) as usize;
        let row = (local_y / step) as usize;

        // Positions inside the spacing between tiles are misses.
        if local_x % step > TILE_SIZE || local_y % step > TILE_SIZE {
            return None;
        }
        if col >= self.columns {
            return None;
        }

        let index = row * self.columns + col;
        (index < entry_count).then_some(index)
    }
}
