// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles driven by the sanitized overlay theme.

use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming::OverlayTheme;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor,
        ..color
    }
}

/// Style for the overlay toolbar buttons (zoom out, zoom in, fit).
pub fn toolbar_button(theme: &OverlayTheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let theme = theme.clone();
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match status {
            button::Status::Hovered => (theme.button_hover_bg, theme.button_hover_text),
            button::Status::Pressed => (theme.button_active_bg, theme.button_text),
            button::Status::Disabled => (
                faded(theme.button_bg, theme.button_disabled_opacity),
                faded(theme.button_text, theme.button_disabled_opacity),
            ),
            button::Status::Active => (theme.button_bg, theme.button_text),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Style for the close button in the overlay corner.
pub fn close_button(theme: &OverlayTheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let theme = theme.clone();
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match status {
            button::Status::Hovered | button::Status::Pressed => {
                (theme.close_button_hover_bg, theme.close_button_hover_text)
            }
            _ => (theme.close_button_bg, theme.close_button_text),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// The dimmed backdrop filling the window behind the magnified image.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// A small color swatch next to each settings field.
pub fn swatch(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn toolbar_button_dims_when_disabled() {
        let theme = OverlayTheme::default();
        let style_fn = toolbar_button(&theme);

        let active = style_fn(&Theme::Dark, button::Status::Active);
        let disabled = style_fn(&Theme::Dark, button::Status::Disabled);

        let alpha = |style: &button::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("expected a background color"),
        };
        assert_abs_diff_eq!(
            alpha(&disabled),
            alpha(&active) * theme.button_disabled_opacity,
            epsilon = 1e-6
        );
        assert!(disabled.text_color.a < active.text_color.a);
    }

    #[test]
    fn toolbar_button_swaps_colors_on_hover() {
        let theme = OverlayTheme::default();
        let style_fn = toolbar_button(&theme);

        let active = style_fn(&Theme::Dark, button::Status::Active);
        let hovered = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
        assert_eq!(hovered.text_color, theme.button_hover_text);
    }

    #[test]
    fn close_button_uses_its_own_palette() {
        let theme = OverlayTheme::default();
        let style_fn = close_button(&theme);

        let active = style_fn(&Theme::Dark, button::Status::Active);
        assert_eq!(
            active.background,
            Some(Background::Color(theme.close_button_bg))
        );
    }

    #[test]
    fn backdrop_is_translucent_black() {
        let style = backdrop(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => {
                assert_abs_diff_eq!(color.a, opacity::OVERLAY_STRONG);
                assert_abs_diff_eq!(color.r, 0.0);
            }
            _ => panic!("expected a background color"),
        }
    }
}
