use crate::common::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// Colors are plain values: two colors are equal when their components are.
///
/// # Examples
///
/// ```rust
/// use pitaya::common::style::RGBColor;
///
/// let teal = RGBColor::new(0x00, 0x96, 0x88);
/// assert_eq!(RGBColor::from_hex("#009688"), Some(teal));
/// assert_eq!(teal.to_hex(), "009688");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const WHITE: RGBColor = RGBColor::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: RGBColor = RGBColor::new(0x00, 0x00, 0x00);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Create an RGB color from a hex string.
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "FF0000" or "#FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix), as used by `a:srgbClr`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for RGBColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s).ok_or_else(|| Error::Config(format!("Invalid hex color '{}'", s)))
    }
}

impl TryFrom<String> for RGBColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A color as written in content: either a palette entry or a literal.
///
/// `"teal"` names an entry of the theme's palette, `"#E53935"` is a literal.
/// Resolution happens against the theme at assembly time, so the same content
/// renders differently under a different palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorRef {
    /// A named palette entry
    Named(String),
    /// A literal color
    Rgb(RGBColor),
}

impl ColorRef {
    /// Reference a palette entry by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl From<RGBColor> for ColorRef {
    fn from(color: RGBColor) -> Self {
        Self::Rgb(color)
    }
}

impl FromStr for ColorRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return s.parse().map(Self::Rgb);
        }
        if s.is_empty() {
            return Err(Error::Config("Empty color reference".to_string()));
        }
        Ok(Self::Named(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for ColorRef {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Rgb(color) => write!(f, "{}", color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let red = RGBColor::from_hex("E53935").unwrap();
        assert_eq!(red, RGBColor::new(0xE5, 0x39, 0x35));
        assert_eq!(red.to_string(), "#E53935");
        assert_eq!(RGBColor::from_u32(0x0B1D51), RGBColor::new(0x0B, 0x1D, 0x51));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(RGBColor::from_hex("FFF").is_none());
        assert!(RGBColor::from_hex("GG0000").is_none());
        assert!(RGBColor::from_hex("é12345").is_none());
        assert!(matches!("#12".parse::<RGBColor>(), Err(Error::Config(_))));
    }

    #[test]
    fn test_color_ref_parse() {
        assert_eq!("Teal".parse::<ColorRef>().unwrap(), ColorRef::named("teal"));
        assert_eq!(
            "#FFB300".parse::<ColorRef>().unwrap(),
            ColorRef::Rgb(RGBColor::new(0xFF, 0xB3, 0x00))
        );
        assert!("#nope".parse::<ColorRef>().is_err());
        assert!("  ".parse::<ColorRef>().is_err());
    }
}
