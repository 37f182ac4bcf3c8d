// SPDX-License-Identifier: MPL-2.0
//! The theme settings screen.
//!
//! Each overlay theme entry gets a text field holding its CSS-style value,
//! a live swatch, the normalized `rgba(…)` readout and a per-key reset.
//! Edits only reach the stored configuration through Save; the application
//! re-themes the overlay only after the file was written successfully.

use crate::color::{format_rgba, parse_css_color};
use crate::config::{defaults, ThemeConfig};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::OverlayTheme;
use iced::alignment::Vertical;
use iced::widget::{button, column, container, horizontal_space, row, text, text_input, Column};
use iced::{Element, Length};

/// One entry of the overlay theme, in the order the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKey {
    ButtonBg,
    ButtonText,
    ButtonHoverBg,
    ButtonHoverText,
    ButtonActiveBg,
    ButtonDisabledOpacity,
    CloseButtonBg,
    CloseButtonText,
    CloseButtonHoverBg,
    CloseButtonHoverText,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 10] = [
        ThemeKey::ButtonBg,
        ThemeKey::ButtonText,
        ThemeKey::ButtonHoverBg,
        ThemeKey::ButtonHoverText,
        ThemeKey::ButtonActiveBg,
        ThemeKey::ButtonDisabledOpacity,
        ThemeKey::CloseButtonBg,
        ThemeKey::CloseButtonText,
        ThemeKey::CloseButtonHoverBg,
        ThemeKey::CloseButtonHoverText,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ThemeKey::ButtonBg => "Button background",
            ThemeKey::ButtonText => "Button text",
            ThemeKey::ButtonHoverBg => "Button hover background",
            ThemeKey::ButtonHoverText => "Button hover text",
            ThemeKey::ButtonActiveBg => "Button active background",
            ThemeKey::ButtonDisabledOpacity => "Disabled button opacity",
            ThemeKey::CloseButtonBg => "Close button background",
            ThemeKey::CloseButtonText => "Close button text",
            ThemeKey::CloseButtonHoverBg => "Close button hover background",
            ThemeKey::CloseButtonHoverText => "Close button hover text",
        }
    }

    /// Whether the entry holds a color string rather than a number.
    #[must_use]
    pub fn is_color(self) -> bool {
        !matches!(self, ThemeKey::ButtonDisabledOpacity)
    }

    /// The built-in default, in the string form the field shows.
    #[must_use]
    pub fn default_value(self) -> String {
        match self {
            ThemeKey::ButtonBg => defaults::DEFAULT_BUTTON_BG.to_string(),
            ThemeKey::ButtonText => defaults::DEFAULT_BUTTON_TEXT.to_string(),
            ThemeKey::ButtonHoverBg => defaults::DEFAULT_BUTTON_HOVER_BG.to_string(),
            ThemeKey::ButtonHoverText => defaults::DEFAULT_BUTTON_HOVER_TEXT.to_string(),
            ThemeKey::ButtonActiveBg => defaults::DEFAULT_BUTTON_ACTIVE_BG.to_string(),
            ThemeKey::ButtonDisabledOpacity => {
                defaults::DEFAULT_BUTTON_DISABLED_OPACITY.to_string()
            }
            ThemeKey::CloseButtonBg => defaults::DEFAULT_CLOSE_BUTTON_BG.to_string(),
            ThemeKey::CloseButtonText => defaults::DEFAULT_CLOSE_BUTTON_TEXT.to_string(),
            ThemeKey::CloseButtonHoverBg => defaults::DEFAULT_CLOSE_BUTTON_HOVER_BG.to_string(),
            ThemeKey::CloseButtonHoverText => defaults::DEFAULT_CLOSE_BUTTON_HOVER_TEXT.to_string(),
        }
    }

    fn index(self) -> usize {
        ThemeKey::ALL
            .iter()
            .position(|key| *key == self)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(ThemeKey, String),
    Submit,
    ResetKey(ThemeKey),
    ResetAll,
    Back,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    inputs: Vec<String>,
    status: Option<(String, bool)>,
}

impl State {
    /// Builds the form from the stored theme, showing defaults for keys
    /// that are unset.
    #[must_use]
    pub fn from_config(theme: &ThemeConfig) -> Self {
        let mut state = Self {
            inputs: vec![String::new(); ThemeKey::ALL.len()],
            status: None,
        };
        state.apply(theme);
        state
    }

    #[must_use]
    pub fn input(&self, key: ThemeKey) -> &str {
        self.inputs
            .get(key.index())
            .map_or("", String::as_str)
    }

    pub fn set_input(&mut self, key: ThemeKey, value: String) {
        if let Some(slot) = self.inputs.get_mut(key.index()) {
            *slot = value;
        }
        self.status = None;
    }

    /// Rewrites every field from a stored theme.
    pub fn apply(&mut self, theme: &ThemeConfig) {
        for key in ThemeKey::ALL {
            let value = match key {
                ThemeKey::ButtonBg => theme.button_bg.clone(),
                ThemeKey::ButtonText => theme.button_text.clone(),
                ThemeKey::ButtonHoverBg => theme.button_hover_bg.clone(),
                ThemeKey::ButtonHoverText => theme.button_hover_text.clone(),
                ThemeKey::ButtonActiveBg => theme.button_active_bg.clone(),
                ThemeKey::ButtonDisabledOpacity => {
                    theme.button_disabled_opacity.map(|v| v.to_string())
                }
                ThemeKey::CloseButtonBg => theme.close_button_bg.clone(),
                ThemeKey::CloseButtonText => theme.close_button_text.clone(),
                ThemeKey::CloseButtonHoverBg => theme.close_button_hover_bg.clone(),
                ThemeKey::CloseButtonHoverText => theme.close_button_hover_text.clone(),
            };
            if let Some(slot) = self.inputs.get_mut(key.index()) {
                *slot = value.unwrap_or_else(|| key.default_value());
            }
        }
    }

    pub fn reset_key(&mut self, key: ThemeKey) {
        if let Some(slot) = self.inputs.get_mut(key.index()) {
            *slot = key.default_value();
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status = Some((message.into(), is_error));
    }

    /// Turns the form contents into a storable theme. Fields that fail to
    /// parse are dropped so the stored entry falls back to its default.
    #[must_use]
    pub fn sanitized(&self) -> ThemeConfig {
        let color = |key: ThemeKey| {
            let trimmed = self.input(key).trim();
            parse_css_color(trimmed).map(|_| trimmed.to_string())
        };

        ThemeConfig {
            button_bg: color(ThemeKey::ButtonBg),
            button_text: color(ThemeKey::ButtonText),
            button_hover_bg: color(ThemeKey::ButtonHoverBg),
            button_hover_text: color(ThemeKey::ButtonHoverText),
            button_active_bg: color(ThemeKey::ButtonActiveBg),
            button_disabled_opacity: self
                .input(ThemeKey::ButtonDisabledOpacity)
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|value| value.is_finite())
                .map(|value| value.clamp(0.0, 1.0)),
            close_button_bg: color(ThemeKey::CloseButtonBg),
            close_button_text: color(ThemeKey::CloseButtonText),
            close_button_hover_bg: color(ThemeKey::CloseButtonHoverBg),
            close_button_hover_text: color(ThemeKey::CloseButtonHoverText),
        }
    }

    /// The theme the current form contents would produce, for the live
    /// preview.
    #[must_use]
    pub fn preview_theme(&self) -> OverlayTheme {
        OverlayTheme::sanitize(&self.sanitized())
    }

    #[must_use]
    pub fn view(&self) -> Element<'_, Message> {
        let preview = self.preview_theme();

        let mut fields = Column::new().spacing(spacing::SM);
        for key in ThemeKey::ALL {
            fields = fields.push(self.field_row(key, &preview));
        }

        let actions = row![
            button(text("Save").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::Submit),
            button(text("Restore defaults").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::ResetAll),
            horizontal_space(),
            button(text("Back").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::Back),
        ]
        .spacing(spacing::XS)
        .width(Length::Fill);

        let mut content = column![
            text("Overlay theme").size(typography::TITLE_MD),
            fields,
            self.preview_row(&preview),
            actions,
        ]
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(720.0);

        if let Some((message, is_error)) = &self.status {
            let color = if *is_error {
                palette::ERROR_300
            } else {
                palette::SUCCESS_300
            };
            content = content.push(text(message.clone()).size(typography::BODY).color(color));
        }

        container(content).width(Length::Fill).center_x(Length::Fill).into()
    }

    fn field_row(&self, key: ThemeKey, preview: &OverlayTheme) -> Element<'_, Message> {
        let mut entry = row![
            text(key.label()).size(typography::BODY).width(Length::Fixed(220.0)),
            text_input(&key.default_value(), self.input(key))
                .size(typography::BODY)
                .on_input(move |value| Message::InputChanged(key, value))
                .on_submit(Message::Submit)
                .width(Length::Fill),
        ]
        .spacing(spacing::SM)
        .align_y(Vertical::Center);

        if key.is_color() {
            let swatch_color =
                parse_css_color(self.input(key).trim()).unwrap_or(preview_color(key, preview));
            entry = entry.push(
                container(text(""))
                    .width(Length::Fixed(24.0))
                    .height(Length::Fixed(24.0))
                    .style(styles::swatch(swatch_color)),
            );
            entry = entry.push(
                text(format_rgba(swatch_color))
                    .size(typography::CAPTION)
                    .width(Length::Fixed(160.0)),
            );
        }

        entry = entry.push(
            button(text("Reset").size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .on_press(Message::ResetKey(key)),
        );

        entry.into()
    }

    /// A mock toolbar and close button rendered with the form's colors.
    fn preview_row<'a>(&self, preview: &OverlayTheme) -> Element<'a, Message> {
        let toolbar_button = |label: &'a str, enabled: bool| {
            let styled = button(text(label).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::toolbar_button(preview));
            if enabled {
                // Pressing a preview button is inert but keeps hover styling
                // observable.
                styled.on_press(Message::Submit)
            } else {
                styled
            }
        };

        row![
            text("Preview").size(typography::BODY).width(Length::Fixed(220.0)),
            toolbar_button("\u{2212}", true),
            toolbar_button("+", true),
            toolbar_button("Fit", false),
            button(text("\u{2715}").size(typography::BODY))
                .padding(spacing::XS)
                .style(styles::close_button(preview)),
        ]
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .into()
    }
}

fn preview_color(key: ThemeKey, preview: &OverlayTheme) -> iced::Color {
    match key {
        ThemeKey::ButtonBg => preview.button_bg,
        ThemeKey::ButtonText => preview.button_text,
        ThemeKey::ButtonHoverBg => preview.button_hover_bg,
        ThemeKey::ButtonHoverText => preview.button_hover_text,
        ThemeKey::ButtonActiveBg => preview.button_active_bg,
        ThemeKey::ButtonDisabledOpacity => iced::Color::TRANSPARENT,
        ThemeKey::CloseButtonBg => preview.close_button_bg,
        ThemeKey::CloseButtonText => preview.close_button_text,
        ThemeKey::CloseButtonHoverBg => preview.close_button_hover_bg,
        ThemeKey::CloseButtonHoverText => preview.close_button_hover_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn form_starts_with_defaults_for_unset_keys() {
        let state = State::from_config(&ThemeConfig::default());
        assert_eq!(state.input(ThemeKey::ButtonBg), defaults::DEFAULT_BUTTON_BG);
        assert_eq!(state.input(ThemeKey::ButtonHoverText), "#fff");
        assert_eq!(state.input(ThemeKey::ButtonDisabledOpacity), "0.28");
    }

    #[test]
    fn stored_values_override_defaults_in_the_form() {
        let theme = ThemeConfig {
            button_bg: Some("#123456".to_string()),
            ..ThemeConfig::default()
        };
        let state = State::from_config(&theme);
        assert_eq!(state.input(ThemeKey::ButtonBg), "#123456");
        assert_eq!(state.input(ThemeKey::ButtonText), defaults::DEFAULT_BUTTON_TEXT);
    }

    #[test]
    fn sanitized_drops_unparseable_entries() {
        let mut state = State::from_config(&ThemeConfig::default());
        state.set_input(ThemeKey::ButtonBg, "garbage".to_string());
        state.set_input(ThemeKey::ButtonText, "  #ff0000  ".to_string());

        let sanitized = state.sanitized();
        assert!(sanitized.button_bg.is_none());
        assert_eq!(sanitized.button_text.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn sanitized_clamps_the_disabled_opacity() {
        let mut state = State::from_config(&ThemeConfig::default());
        state.set_input(ThemeKey::ButtonDisabledOpacity, "3.5".to_string());
        assert_abs_diff_eq!(
            state.sanitized().button_disabled_opacity.expect("opacity parses"),
            1.0
        );

        state.set_input(ThemeKey::ButtonDisabledOpacity, "abc".to_string());
        assert!(state.sanitized().button_disabled_opacity.is_none());
    }

    #[test]
    fn reset_key_restores_the_default_string() {
        let mut state = State::from_config(&ThemeConfig::default());
        state.set_input(ThemeKey::CloseButtonBg, "#000".to_string());
        state.reset_key(ThemeKey::CloseButtonBg);
        assert_eq!(
            state.input(ThemeKey::CloseButtonBg),
            defaults::DEFAULT_CLOSE_BUTTON_BG
        );
    }

    #[test]
    fn editing_clears_the_status_line() {
        let mut state = State::from_config(&ThemeConfig::default());
        state.set_status("Saved.", false);
        state.set_input(ThemeKey::ButtonBg, "#fff".to_string());
        assert!(state.status.is_none());
    }

    #[test]
    fn preview_theme_follows_the_form() {
        let mut state = State::from_config(&ThemeConfig::default());
        state.set_input(ThemeKey::ButtonText, "#00ff00".to_string());
        let preview = state.preview_theme();
        assert_abs_diff_eq!(preview.button_text.g, 1.0);
        assert_abs_diff_eq!(preview.button_text.r, 0.0);
    }
}
