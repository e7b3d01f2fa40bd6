//! Color parsing helpers for theme configuration values.
//!
//! A color value may be written as:
//! - an array of three or four channels: `[0.2, 0.4, 0.6]`, `[0.2, 0.4, 0.6, 1.0]`
//! - a comma separated string of channels: `"0.2, 0.4, 0.6, 1"`
//! - a hex string: `"#336699"` or `"#336699cc"`
//!
//! Channels are floats in `[0, 1]` but are not clamped.

use toml::Value;
use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};

/// Sentinel returned when a color name cannot be resolved.
pub const ERROR_COLOR: Color = Color::new([1.0, 0.0, 0.0, 1.0]);

/// The value a color takes when its configuration is absent or unreadable.
pub const ZERO_COLOR: Color = Color::new([0.0, 0.0, 0.0, 0.0]);

/// Opaque black, the baseline text color of a style.
pub const BLACK: Color = Color::new([0.0, 0.0, 0.0, 1.0]);

/// Opaque white, the default text color of layout draw calls.
pub const WHITE: Color = Color::new([1.0, 1.0, 1.0, 1.0]);

/// Parse a color from a configuration value.
pub fn parse_color_value(value: &Value) -> ThemeResult<Color> {
    match value {
        Value::String(text) if text.trim_start().starts_with('#') => parse_hex_color(text),
        Value::String(text) => {
            let channels = text
                .split(',')
                .map(|part| {
                    part.trim()
                        .parse::<f32>()
                        .map_err(|_| ThemeError::InvalidColor(text.clone()))
                })
                .collect::<ThemeResult<Vec<f32>>>()?;
            from_channels(&channels).ok_or_else(|| ThemeError::InvalidColor(text.clone()))
        },
        Value::Array(items) => {
            let channels = items
                .iter()
                .map(|item| match item {
                    Value::Float(f) => Some(*f as f32),
                    Value::Integer(i) => Some(*i as f32),
                    _ => None,
                })
                .collect::<Option<Vec<f32>>>()
                .ok_or_else(|| ThemeError::InvalidColor(value.to_string()))?;
            from_channels(&channels).ok_or_else(|| ThemeError::InvalidColor(value.to_string()))
        },
        other => Err(ThemeError::InvalidColor(other.to_string())),
    }
}

fn from_channels(channels: &[f32]) -> Option<Color> {
    match *channels {
        [r, g, b] => Some(Color::new([r, g, b, 1.0])),
        [r, g, b, a] => Some(Color::new([r, g, b, a])),
        _ => None,
    }
}

/// Parse a hex color string with optional alpha channel.
///
/// Supports `#rrggbb` (opaque) and `#rrggbbaa`.
pub fn parse_hex_color(hex: &str) -> ThemeResult<Color> {
    let hex = hex.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| ThemeError::InvalidColor(hex.to_string()))
    };

    match hex.len() {
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(ThemeError::InvalidColor(format!(
            "Hex color must be 6 or 8 characters: {}",
            hex
        ))),
    }
}

/// Quantize a color to RGBA8 bytes, clamping each channel.
pub fn to_rgba8(color: Color) -> [u8; 4] {
    color.components.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_colors() {
        let value: Value = toml::Value::Array(vec![
            Value::Float(0.5),
            Value::Integer(1),
            Value::Float(0.0),
        ]);
        assert_eq!(parse_color_value(&value).unwrap().components, [0.5, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_out_of_range_channels_pass_through() {
        let value = Value::String("2.0, -1, 0.5, 1".to_string());
        assert_eq!(parse_color_value(&value).unwrap().components, [2.0, -1.0, 0.5, 1.0]);
    }

    #[test]
    fn test_hex_colors() {
        let opaque = parse_hex_color("#ff0000").unwrap();
        assert_eq!(to_rgba8(opaque), [255, 0, 0, 255]);

        let translucent = parse_hex_color("#00000080").unwrap();
        assert_eq!(to_rgba8(translucent), [0, 0, 0, 128]);

        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let value = Value::Array(vec![Value::Float(0.5), Value::Float(0.5)]);
        assert!(matches!(parse_color_value(&value), Err(ThemeError::InvalidColor(_))));
        assert!(parse_color_value(&Value::Boolean(true)).is_err());
    }

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(to_rgba8(Color::new([2.0, -1.0, 0.5, 1.0])), [255, 0, 128, 255]);
    }
}
