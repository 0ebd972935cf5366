use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// RGB color value.
///
/// Represents a color using red, green, and blue components, each in the
/// range 0-255.
///
/// # Examples
///
/// ```rust
/// use pitaya::color::RgbColor;
///
/// let red = RgbColor::new(255, 0, 0);
/// let blue = RgbColor::parse_hex("0000FF").unwrap();
/// assert_eq!(blue.to_hex(), "0000FF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Opaque black, the universal degradation target for unresolvable
    /// color references.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse an RGB color from a 6-digit hex string.
    ///
    /// A leading `#` is accepted and ignored. Unlike the lenient
    /// resolver entry points, this returns the parse failure so callers
    /// can decide the degradation policy themselves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pitaya::color::RgbColor;
    ///
    /// assert_eq!(RgbColor::parse_hex("FF0000"), Ok(RgbColor::new(255, 0, 0)));
    /// assert!(RgbColor::parse_hex("FF00").is_err());
    /// ```
    pub fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::InvalidLength(digits.chars().count()));
        }

        let channel = |range| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(digits.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as a 6-digit uppercase hex string (no `#` prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(RgbColor::parse_hex("0070C0"), Ok(RgbColor::new(0, 112, 192)));
        assert_eq!(RgbColor::parse_hex("#FFFFFF"), Ok(RgbColor::WHITE));
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert_eq!(
            RgbColor::parse_hex("FFF"),
            Err(ColorParseError::InvalidLength(3))
        );
        assert_eq!(
            RgbColor::parse_hex("GG0000"),
            Err(ColorParseError::InvalidDigit("GG0000".to_string()))
        );
        assert!(RgbColor::parse_hex("").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let color = RgbColor::new(0, 56, 96);
        assert_eq!(RgbColor::parse_hex(&color.to_hex()), Ok(color));
        assert_eq!(format!("{}", color), "#003860");
    }
}
