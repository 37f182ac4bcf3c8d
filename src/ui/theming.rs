// SPDX-License-Identifier: MPL-2.0
//! The sanitized overlay theme.
//!
//! [`OverlayTheme`] is what the widgets actually consume: every field is a
//! parsed [`iced::Color`] or a clamped number. Sanitization happens key by
//! key against the stored [`ThemeConfig`], so one malformed entry falls
//! back to its default without touching the others.

use crate::color::parse_css_color;
use crate::config::defaults;
use crate::config::ThemeConfig;
use iced::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTheme {
    pub button_bg: Color,
    pub button_text: Color,
    pub button_hover_bg: Color,
    pub button_hover_text: Color,
    pub button_active_bg: Color,
    pub button_disabled_opacity: f32,
    pub close_button_bg: Color,
    pub close_button_text: Color,
    pub close_button_hover_bg: Color,
    pub close_button_hover_text: Color,
}

impl Default for OverlayTheme {
    fn default() -> Self {
        Self {
            button_bg: Color::from_rgba(1.0, 1.0, 1.0, 0.13),
            button_text: Color::from_rgba(1.0, 1.0, 1.0, 0.92),
            button_hover_bg: Color::from_rgba(1.0, 1.0, 1.0, 0.22),
            button_hover_text: Color::WHITE,
            button_active_bg: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            button_disabled_opacity: defaults::DEFAULT_BUTTON_DISABLED_OPACITY,
            close_button_bg: Color::from_rgba(18.0 / 255.0, 18.0 / 255.0, 22.0 / 255.0, 0.68),
            close_button_text: Color::from_rgba(1.0, 1.0, 1.0, 0.75),
            close_button_hover_bg: Color::from_rgba(1.0, 1.0, 1.0, 0.14),
            close_button_hover_text: Color::WHITE,
        }
    }
}

impl OverlayTheme {
    /// Builds a theme from stored entries, falling back to the default for
    /// every key that is missing or fails to parse.
    #[must_use]
    pub fn sanitize(config: &ThemeConfig) -> Self {
        let fallback = Self::default();

        Self {
            button_bg: parse_or(config.button_bg.as_deref(), fallback.button_bg),
            button_text: parse_or(config.button_text.as_deref(), fallback.button_text),
            button_hover_bg: parse_or(config.button_hover_bg.as_deref(), fallback.button_hover_bg),
            button_hover_text: parse_or(
                config.button_hover_text.as_deref(),
                fallback.button_hover_text,
            ),
            button_active_bg: parse_or(
                config.button_active_bg.as_deref(),
                fallback.button_active_bg,
            ),
            button_disabled_opacity: config
                .button_disabled_opacity
                .filter(|value| value.is_finite())
                .map_or(fallback.button_disabled_opacity, |value| {
                    value.clamp(0.0, 1.0)
                }),
            close_button_bg: parse_or(config.close_button_bg.as_deref(), fallback.close_button_bg),
            close_button_text: parse_or(
                config.close_button_text.as_deref(),
                fallback.close_button_text,
            ),
            close_button_hover_bg: parse_or(
                config.close_button_hover_bg.as_deref(),
                fallback.close_button_hover_bg,
            ),
            close_button_hover_text: parse_or(
                config.close_button_hover_text.as_deref(),
                fallback.close_button_hover_text,
            ),
        }
    }
}

fn parse_or(value: Option<&str>, fallback: Color) -> Color {
    value.and_then(parse_css_color).unwrap_or(fallback)
}
