// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Only the overlay chrome and the settings screen draw from these; the
//! user-themable overlay colors live in [`crate::ui::theming`] instead.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Feedback colors for the settings status line.
    pub const SUCCESS_300: Color = Color::from_rgba(0.718, 1.0, 0.769, 0.95);
    pub const ERROR_300: Color = Color::from_rgba(1.0, 0.71, 0.71, 0.95);
}

pub mod opacity {
    /// Backdrop behind the magnified image.
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod typography {
    /// Medium title - screen headings.
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - most UI text, labels.
    pub const BODY: f32 = 14.0;

    /// Caption - hints, normalized color readouts.
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(opacity::OVERLAY_STRONG > 0.0 && opacity::OVERLAY_STRONG < 1.0);
    assert!(typography::TITLE_MD > typography::BODY);
};
