//! Normalized RGBA color and the integer-channel conversion.
//!
//! Every channel is an `f64` in [0, 1]. Kernels always produce opaque colors
//! (`a == 1.0`); only the host-supplied current color may carry transparency.

use crate::error::KernelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGBA color with components in [0, 1].
///
/// Serializes as a hex string: `"#rrggbb"` when opaque, `"#rrggbbaa"`
/// otherwise. The hex form is 8-bit quantized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
    pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::opaque(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::opaque(0.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::opaque(1.0, 165.0 / 255.0, 0.0);

    /// Creates a color from raw normalized channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from normalized RGB channels.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Converts 0–255 integer channels to an opaque normalized color.
    ///
    /// Each channel is divided by 255 in floating point; no other rounding
    /// is applied.
    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self::opaque(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (leading `#` optional, case insensitive).
    ///
    /// Returns `KernelError::InvalidColor` for anything else.
    pub fn from_hex(hex: &str) -> Result<Color, KernelError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(KernelError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        if !hex.is_ascii() {
            return Err(KernelError::InvalidColor(format!(
                "non-ascii hex color: {hex}"
            )));
        }
        let channel = |range: std::ops::Range<usize>, label: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| KernelError::InvalidColor(format!("invalid {label} component: {e}")))
        };
        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let mut color = Color::from_channels(r, g, b);
        if hex.len() == 8 {
            color.a = channel(6..8, "alpha")? as f64 / 255.0;
        }
        Ok(color)
    }

    /// Formats the color as `"#rrggbb"`, or `"#rrggbbaa"` when not opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Quantizes to 8-bit RGBA with clamping and rounding.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Returns this color with alpha forced to 1.
    pub fn with_opaque_alpha(self) -> Self {
        Self { a: 1.0, ..self }
    }

    /// True when alpha is exactly 1.
    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn from_channels_black_and_white() {
        assert_eq!(Color::from_channels(0, 0, 0), Color::BLACK);
        assert_eq!(Color::from_channels(255, 255, 255), Color::WHITE);
    }

    #[test]
    fn from_channels_divides_by_255() {
        let c = Color::from_channels(22, 155, 98);
        assert!(approx_eq(c.r, 22.0 / 255.0));
        assert!(approx_eq(c.g, 155.0 / 255.0));
        assert!(approx_eq(c.b, 98.0 / 255.0));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn from_hex_parses_with_and_without_prefix() {
        let a = Color::from_hex("#ff8000").unwrap();
        let b = Color::from_hex("FF8000").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Color::from_channels(255, 128, 0));
    }

    #[test]
    fn from_hex_reads_alpha() {
        let c = Color::from_hex("#00000080").unwrap();
        assert!(approx_eq(c.a, 128.0 / 255.0));
        assert!(!c.is_opaque());
    }

    #[test]
    fn from_hex_rejects_bad_length() {
        let err = Color::from_hex("#fff").unwrap_err();
        assert!(matches!(err, KernelError::InvalidColor(_)));
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#é0000").is_err());
    }

    #[test]
    fn to_hex_omits_alpha_when_opaque() {
        assert_eq!(Color::ORANGE.to_hex(), "#ffa500");
        assert_eq!(Color::TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn to_rgba8_clamps_out_of_range_channels() {
        let c = Color::new(-0.5, 1.5, 0.5, 1.0);
        assert_eq!(c.to_rgba8(), [0, 255, 128, 255]);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::RED).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let back: Color = serde_json::from_str("\"#0000ff\"").unwrap();
        assert_eq!(back, Color::BLUE);
    }

    #[test]
    fn serde_rejects_invalid_hex() {
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn with_opaque_alpha_keeps_rgb() {
        let c = Color::new(0.1, 0.2, 0.3, 0.0).with_opaque_alpha();
        assert_eq!(c, Color::opaque(0.1, 0.2, 0.3));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn from_channels_is_exact_division(r: u8, g: u8, b: u8) {
                let c = Color::from_channels(r, g, b);
                prop_assert!(approx_eq(c.r, r as f64 / 255.0), "r: {}", c.r);
                prop_assert!(approx_eq(c.g, g as f64 / 255.0), "g: {}", c.g);
                prop_assert!(approx_eq(c.b, b as f64 / 255.0), "b: {}", c.b);
                prop_assert_eq!(c.a, 1.0);
                prop_assert!((0.0..=1.0).contains(&c.r));
                prop_assert!((0.0..=1.0).contains(&c.g));
                prop_assert!((0.0..=1.0).contains(&c.b));
            }

            #[test]
            fn channels_survive_rgba8_quantization(r: u8, g: u8, b: u8) {
                let c = Color::from_channels(r, g, b);
                prop_assert_eq!(c.to_rgba8(), [r, g, b, 255]);
            }
        }
    }
}
