// SPDX-License-Identifier: MPL-2.0
//! Parsing and formatting of CSS-style color strings.
//!
//! The theme file stores colors the way the settings form shows them:
//! `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
//! Anything else is rejected so the caller can fall back to its default.

use iced::Color;

/// Parses a CSS-style color string into an [`iced::Color`].
///
/// RGB channels are 0–255 and clamped; alpha is 0–1 and clamped.
/// Returns `None` for anything that does not match a supported form.
#[must_use]
pub fn parse_css_color(value: &str) -> Option<Color> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
    {
        let args = args.strip_suffix(')')?;
        return parse_rgb_args(args);
    }

    None
}

/// Formats a color back into the canonical `rgba(r, g, b, a)` form used for
/// display next to each settings field, with the alpha rounded to three
/// decimal places.
#[must_use]
pub fn format_rgba(color: Color) -> String {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    let alpha = (color.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        alpha
    )
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expand = |c: char| {
        let digit = c.to_digit(16).unwrap_or(0) as u8;
        digit * 16 + digit
    };

    let chars: Vec<char> = hex.chars().collect();
    let (r, g, b, a) = match chars.len() {
        3 => (expand(chars[0]), expand(chars[1]), expand(chars[2]), 255),
        6 => (byte(hex, 0)?, byte(hex, 2)?, byte(hex, 4)?, 255),
        8 => (byte(hex, 0)?, byte(hex, 2)?, byte(hex, 4)?, byte(hex, 6)?),
        _ => return None,
    };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

fn byte(hex: &str, offset: usize) -> Option<u8> {
    u8::from_str_radix(hex.get(offset..offset + 2)?, 16).ok()
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() < 3 || parts.len() > 4 {
        return None;
    }

    let mut channels = [0.0_f32; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: f32 = part.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        *slot = value.clamp(0.0, 255.0) / 255.0;
    }

    let alpha = if parts.len() == 4 {
        let value: f32 = parts[3].parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        value.clamp(0.0, 1.0)
    } else {
        1.0
    };

    Some(Color {
        r: channels[0],
        g: channels[1],
        b: channels[2],
        a: alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn parses_six_digit_hex() {
        let color = parse_css_color("#336699").expect("valid hex");
        assert_abs_diff_eq!(color.r, 0.2, epsilon = 0.01);
        assert_abs_diff_eq!(color.g, 0.4, epsilon = 0.01);
        assert_abs_diff_eq!(color.b, 0.6, epsilon = 0.01);
        assert_abs_diff_eq!(color.a, 1.0);
    }

    #[test]
    fn parses_three_digit_hex_shorthand() {
        let color = parse_css_color("#fff").expect("valid hex");
        assert_abs_diff_eq!(color.r, 1.0);
        assert_abs_diff_eq!(color.b, 1.0);
    }

    #[test]
    fn parses_rgba_with_fractional_alpha() {
        let color = parse_css_color("rgba(255, 255, 255, 0.13)").expect("valid rgba");
        assert_abs_diff_eq!(color.r, 1.0);
        assert_abs_diff_eq!(color.a, 0.13);
    }

    #[test]
    fn parses_rgb_without_alpha() {
        let color = parse_css_color("rgb(18, 18, 22)").expect("valid rgb");
        assert_abs_diff_eq!(color.a, 1.0);
        assert_abs_diff_eq!(color.r, 18.0 / 255.0);
    }

    #[test]
    fn clamps_out_of_range_components() {
        let color = parse_css_color("rgba(300, -5, 128, 2)").expect("clamped rgba");
        assert_abs_diff_eq!(color.r, 1.0);
        assert_abs_diff_eq!(color.g, 0.0);
        assert_abs_diff_eq!(color.a, 1.0);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(parse_css_color("not-a-color").is_none());
        assert!(parse_css_color("").is_none());
        assert!(parse_css_color("#12345").is_none());
        assert!(parse_css_color("rgba(1, 2)").is_none());
        assert!(parse_css_color("rgb(a, b, c)").is_none());
    }

    #[test]
    fn format_round_trips_through_parse() {
        let formatted = format_rgba(Color::from_rgba8(18, 18, 22, 0.68));
        assert_eq!(formatted, "rgba(18, 18, 22, 0.68)");
        let parsed = parse_css_color(&formatted).expect("own output should parse");
        assert_abs_diff_eq!(parsed.a, 0.68);
    }
}
