use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_rgb(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a 6-digit hex string (optional leading `#`) to RGB channels.
/// Anything else, including 3- and 8-digit forms, is `InvalidFormat`.
pub fn parse_hex_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    // from_str_radix accepts a leading '+', so check the digits up front
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat {
            input: hex.to_string(),
        });
    }

    let channel = |i: usize| {
        u8::from_str_radix(&raw[i..i + 2], 16).map_err(|_| ColorError::InvalidFormat {
            input: hex.to_string(),
        })
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_hex_rgb("#ff0000"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(parse_hex_rgb("#00ff00"), Ok(Rgb::new(0, 255, 0)));
        assert_eq!(parse_hex_rgb("#1e293b"), Ok(Rgb::new(30, 41, 59)));
    }

    #[test]
    fn parse_uppercase_white() {
        assert_eq!(parse_hex_rgb("#FFFFFF"), Ok(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(parse_hex_rgb("006978"), Ok(Rgb::new(0, 105, 120)));
    }

    #[test]
    fn short_hex_is_invalid() {
        assert_eq!(
            parse_hex_rgb("#ABC"),
            Err(ColorError::InvalidFormat {
                input: "#ABC".to_string()
            })
        );
    }

    #[test]
    fn eight_digit_hex_is_invalid() {
        assert!(parse_hex_rgb("#ff000080").is_err());
    }

    #[test]
    fn non_hex_digits_are_invalid() {
        assert!(parse_hex_rgb("#GGGGGG").is_err());
        assert!(parse_hex_rgb("not-a-color").is_err());
        assert!(parse_hex_rgb("+f+f+f").is_err());
    }

    #[test]
    fn empty_and_bare_hash_are_invalid() {
        assert!(parse_hex_rgb("").is_err());
        assert!(parse_hex_rgb("#").is_err());
        assert!(parse_hex_rgb("##ffffff").is_err());
    }

    #[test]
    fn multibyte_input_is_invalid() {
        // six bytes, but not six hex digits
        assert!(parse_hex_rgb("ééé").is_err());
    }

    #[test]
    fn from_str_and_display() {
        let rgb: Rgb = "#2D5A4F".parse().unwrap();
        assert_eq!(rgb, Rgb::new(45, 90, 79));
        assert_eq!(rgb.to_string(), "#2d5a4f");
    }
}
