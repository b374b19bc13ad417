//! RGB color construction and hex-string parsing.

use serde::Serialize;

use crate::error::{Result, WeeklineError};

/// An RGB color with 0–255 components and a unit-interval alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Fully opaque color from 0–255 components.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    /// Color from 0–255 components and a 0.0–1.0 alpha.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Gray from a single 0–255 white level and a 0.0–1.0 alpha.
    pub const fn grayscale(white: u8, a: f32) -> Self {
        Rgba {
            r: white,
            g: white,
            b: white,
            a,
        }
    }

    /// Parse a color from exactly six hex digits, e.g. `"FF0000"`.
    ///
    /// No `#` prefix and no alpha digits are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`WeeklineError::InvalidColor`] for any input that is not
    /// exactly six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(WeeklineError::InvalidColor(format!("'{}'", hex)));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| WeeklineError::InvalidColor(format!("'{}'", hex)))
        };
        Ok(Rgba::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_red() {
        let color = Rgba::from_hex("FF0000").unwrap();
        assert_eq!(color, Rgba::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hex_mixed_case() {
        let color = Rgba::from_hex("1aF0c3").unwrap();
        assert_eq!((color.r, color.g, color.b), (0x1a, 0xf0, 0xc3));
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(Rgba::from_hex("FFF").is_err());
        assert!(Rgba::from_hex("FF00001").is_err());
        assert!(Rgba::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_rejects_prefix_and_non_hex() {
        assert!(matches!(
            Rgba::from_hex("#FF000"),
            Err(WeeklineError::InvalidColor(_))
        ));
        assert!(Rgba::from_hex("GGGGGG").is_err());
        assert!(Rgba::from_hex("+1+2+3").is_err());
    }

    #[test]
    fn test_grayscale() {
        let gray = Rgba::grayscale(149, 0.1);
        assert_eq!((gray.r, gray.g, gray.b), (149, 149, 149));
        assert!((gray.a - 0.1).abs() < f32::EPSILON);
    }
}
