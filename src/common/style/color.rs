//! sRGB color values as written in DrawingML `a:srgbClr/@val`.

use std::fmt;

/// An sRGB color; the value behind an RGB-typed `ColorFormat`.
///
/// ```rust
/// use pptx_introspect::common::RGBColor;
///
/// let accent = RGBColor::from_hex("1F4E79").unwrap();
/// assert_eq!((accent.r, accent.g, accent.b), (0x1F, 0x4E, 0x79));
/// assert_eq!(accent.to_string(), "#1F4E79");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RGBColor {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit `srgbClr` value; a leading `#` is tolerated.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Upper-case `RRGGBB`, the form stored in the `hex` output key.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(RGBColor::from_hex("#1F4E79"), Some(RGBColor::new(0x1F, 0x4E, 0x79)));
        assert_eq!(RGBColor::from_hex("12345"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("ff8000").map(|c| c.to_hex()), Some("FF8000".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::new(0, 128, 255).to_string(), "#0080FF");
    }
}
