use serde::Serialize;

use crate::error::{Error, Result};

/// 8-bit RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rgb {
    /// Red channel intensity.
    pub r: u8,
    /// Green channel intensity.
    pub g: u8,
    /// Blue channel intensity.
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel intensities.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB` encoding, as used in sampled grids and their
    /// CSV exports.
    pub fn hex_upper(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb` encoding, as used in single-pixel lookups.
    pub fn hex_lower(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a 6-digit hex color code.
    ///
    /// Accepts either casing, with or without the leading `#`, so that
    /// re-parsing an export never depends on which encoding produced it.
    pub fn parse_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        // u8::from_str_radix tolerates a leading `+`, so digits must be
        // checked explicitly before the per-channel parse.
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidHex(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_casing() {
        let c = Rgb::new(0xAB, 0x0C, 0xEF);
        assert_eq!(c.hex_upper(), "#AB0CEF");
        assert_eq!(c.hex_lower(), "#ab0cef");
    }

    #[test]
    fn test_hex_zero_padding() {
        assert_eq!(Rgb::new(0, 1, 15).hex_upper(), "#00010F");
    }

    #[test]
    fn test_parse_hex_accepts_both_casings() {
        let c = Rgb::new(0xAB, 0x0C, 0xEF);
        assert_eq!(Rgb::parse_hex("#AB0CEF").unwrap(), c);
        assert_eq!(Rgb::parse_hex("ab0cef").unwrap(), c);
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert!(Rgb::parse_hex("#FFF").is_err());
        assert!(Rgb::parse_hex("#GGGGGG").is_err());
        assert!(Rgb::parse_hex("").is_err());
        assert!(Rgb::parse_hex("#AABBCCDD").is_err());
    }

    #[test]
    fn test_parse_hex_rejects_sign_prefixed_digits() {
        assert!(Rgb::parse_hex("#+1+2+3").is_err());
        assert!(Rgb::parse_hex("+1+2+3").is_err());
    }
}
