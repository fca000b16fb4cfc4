//! RGBA color type
//!
//! A 4-component color value with normalized `f32` channels. This is the
//! single color representation in the crate: palette entries, resolver
//! queries, and resolver results all use it.

use std::str::FromStr;

// Re-export path for ParseColorError - wired through the palette module
use crate::palette::ParseColorError;

/// A color with red, green, blue, and alpha channels.
///
/// Channels produced by the `u8` constructors are normalized to the
/// `0.0..=1.0` range. Query colors are unconstrained: error diffusion
/// routinely pushes channels outside that range, and the resolver accepts
/// such values as-is.
///
/// Alpha is an ordinary channel. It participates in distance calculations
/// exactly like red, green, and blue.
///
/// # Equality
///
/// `PartialEq` is plain float comparison. For cache keying the resolver
/// uses [`Rgba::to_bits`] instead, which is bit-exact: two colors share a
/// cache slot only when all four channels have identical bit patterns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel (0.0..=1.0 for in-gamut colors)
    pub r: f32,
    /// Green channel (0.0..=1.0 for in-gamut colors)
    pub g: f32,
    /// Blue channel (0.0..=1.0 for in-gamut colors)
    pub b: f32,
    /// Alpha channel (0.0 transparent..=1.0 opaque)
    pub a: f32,
}

impl Rgba {
    /// Create a new Rgba color from float values.
    ///
    /// # Arguments
    /// * `r` - Red channel
    /// * `g` - Green channel
    /// * `b` - Blue channel
    /// * `a` - Alpha channel
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an Rgba color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use palette_match::Rgba;
    /// let red = Rgba::from_u8(255, 0, 0, 255);
    /// assert_eq!(red.r, 1.0);
    /// assert_eq!(red.a, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create an Rgba color from a byte array [R, G, B, A].
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array [R, G, B, A].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use palette_match::Rgba;
    /// let color = Rgba::new(1.0, 0.5, 0.0, 1.0);
    /// let bytes = color.to_bytes();
    /// assert_eq!(bytes[0], 255); // red
    /// assert_eq!(bytes[2], 0);   // blue
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.a * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Bit-exact key representation for hashing.
    ///
    /// `f32` implements neither `Eq` nor `Hash`, so the memoization cache
    /// keys on the raw channel bit patterns instead. Structural, not
    /// approximate: `0.0` and `-0.0` are distinct keys even though they
    /// compare equal as floats.
    #[inline]
    pub fn to_bits(self) -> [u32; 4] {
        [
            self.r.to_bits(),
            self.g.to_bits(),
            self.b.to_bits(),
            self.a.to_bits(),
        ]
    }

    /// Squared Euclidean distance to another color.
    ///
    /// Cheaper than [`distance()`](Self::distance) and preserves ordering,
    /// so nearest-color scans compare squared distances and skip the square
    /// root entirely.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        let da = self.a - other.a;
        dr * dr + dg * dg + db * db + da * da
    }

    /// Euclidean distance to another color over the 4-component vector.
    ///
    /// # Example
    /// ```
    /// use palette_match::Rgba;
    /// let black = Rgba::new(0.0, 0.0, 0.0, 1.0);
    /// let grey = Rgba::new(0.4, 0.4, 0.4, 1.0);
    /// assert!((black.distance(grey) - 0.6928).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse an Rgba color from a hex string.
    ///
    /// Supports the following formats, with or without a leading `#`:
    /// - `RRGGBB` - 6-digit hex, alpha defaults to opaque
    /// - `RRGGBBAA` - 8-digit hex with explicit alpha
    /// - `RGB` - shorthand, each digit doubled, alpha opaque
    /// - `RGBA` - shorthand with alpha
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_match::Rgba;
    ///
    /// let white: Rgba = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.to_bytes(), [255, 255, 255, 255]);
    ///
    /// let translucent_red: Rgba = "#FF000080".parse().unwrap();
    /// assert_eq!(translucent_red.to_bytes(), [255, 0, 0, 128]);
    ///
    /// let red: Rgba = "#F00".parse().unwrap();
    /// assert_eq!(red.r, 1.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
        let nibble = |range: &str| -> Result<u8, ParseColorError> {
            Ok(u8::from_str_radix(range, 16)? * 17)
        };

        match s.len() {
            3 => {
                let r = nibble(&s[0..1])?;
                let g = nibble(&s[1..2])?;
                let b = nibble(&s[2..3])?;
                Ok(Self::from_u8(r, g, b, 255))
            }
            4 => {
                let r = nibble(&s[0..1])?;
                let g = nibble(&s[1..2])?;
                let b = nibble(&s[2..3])?;
                let a = nibble(&s[3..4])?;
                Ok(Self::from_u8(r, g, b, a))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b, 255))
            }
            8 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                let a = u8::from_str_radix(&s[6..8], 16)?;
                Ok(Self::from_u8(r, g, b, a))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    #[test]
    fn test_constructors() {
        // from_u8 produces correct float values
        let color = Rgba::from_u8(255, 128, 0, 255);
        assert_eq!(color.r, 1.0);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);

        // from_bytes matches from_u8
        let from_bytes = Rgba::from_bytes([255, 128, 0, 255]);
        assert_eq!(from_bytes, color);

        // to_bytes round-trips correctly for key values
        assert_eq!(Rgba::from_u8(0, 0, 0, 0).to_bytes(), [0, 0, 0, 0]);
        assert_eq!(
            Rgba::from_u8(127, 128, 64, 255).to_bytes(),
            [127, 128, 64, 255]
        );
        assert_eq!(
            Rgba::from_u8(255, 255, 255, 255).to_bytes(),
            [255, 255, 255, 255]
        );
    }

    #[test]
    fn test_to_bytes_clamps_out_of_gamut() {
        // Error diffusion can push channels outside [0, 1]
        let hot = Rgba::new(1.3, -0.2, 0.5, 1.0);
        let bytes = hot.to_bytes();
        assert_eq!(bytes[0], 255);
        assert_eq!(bytes[1], 0);
        assert_eq!(bytes[2], 128);
    }

    #[test]
    fn test_distance_known_values() {
        let black = Rgba::new(0.0, 0.0, 0.0, 1.0);
        let white = Rgba::new(1.0, 1.0, 1.0, 1.0);
        let grey = Rgba::new(0.4, 0.4, 0.4, 1.0);

        // sqrt(3 * 0.4^2) = 0.6928...
        assert!((grey.distance(black) - (3.0f32 * 0.16).sqrt()).abs() < 1e-6);
        // sqrt(3 * 0.6^2) = 1.0392...
        assert!((grey.distance(white) - (3.0f32 * 0.36).sqrt()).abs() < 1e-6);
        // Distance to self is exactly zero
        assert_eq!(grey.distance(grey), 0.0);
        assert_eq!(grey.distance_squared(grey), 0.0);
    }

    #[test]
    fn test_distance_includes_alpha() {
        let opaque = Rgba::new(0.5, 0.5, 0.5, 1.0);
        let transparent = Rgba::new(0.5, 0.5, 0.5, 0.0);
        assert_eq!(opaque.distance(transparent), 1.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Rgba::new(0.1, 0.7, 0.3, 1.0);
        let b = Rgba::new(0.9, 0.2, 0.6, 0.5);
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
    }

    #[test]
    fn test_to_bits_is_bit_exact() {
        let a = Rgba::new(0.5, 0.25, 0.125, 1.0);
        let b = Rgba::new(0.5, 0.25, 0.125, 1.0);
        assert_eq!(a.to_bits(), b.to_bits());

        // 0.0 and -0.0 compare equal as floats but have distinct bits
        let pos_zero = Rgba::new(0.0, 0.0, 0.0, 1.0);
        let neg_zero = Rgba::new(-0.0, 0.0, 0.0, 1.0);
        assert_eq!(pos_zero, neg_zero);
        assert_ne!(pos_zero.to_bits(), neg_zero.to_bits());
    }

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Rgba = "#FFFFFF".parse().unwrap();
        assert_eq!(white.to_bytes(), [255, 255, 255, 255]);

        let black: Rgba = "#000000".parse().unwrap();
        assert_eq!(black.to_bytes(), [0, 0, 0, 255]);

        // Without hash
        let red: Rgba = "FF0000".parse().unwrap();
        assert_eq!(red.to_bytes(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_hex_parsing_8digit() {
        let color: Rgba = "#11223344".parse().unwrap();
        assert_eq!(color.to_bytes(), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let white: Rgba = "#FFF".parse().unwrap();
        assert_eq!(white.to_bytes(), [255, 255, 255, 255]);

        // #ABC expands to #AABBCC
        let color: Rgba = "#ABC".parse().unwrap();
        assert_eq!(color, Rgba::from_u8(0xAA, 0xBB, 0xCC, 255));

        // 4-digit shorthand carries alpha
        let translucent: Rgba = "#F008".parse().unwrap();
        assert_eq!(translucent.to_bytes(), [255, 0, 0, 0x88]);
    }

    #[test]
    fn test_hex_parsing_case_insensitive() {
        let upper: Rgba = "#ABCDEF".parse().unwrap();
        let lower: Rgba = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_hex_parsing_whitespace() {
        let white: Rgba = "  #FFFFFF  ".parse().unwrap();
        assert_eq!(white.to_bytes(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_hex_parsing_errors() {
        // Invalid character
        let result = "#GGG".parse::<Rgba>();
        assert!(matches!(result, Err(ParseColorError::InvalidHex(_))));

        // 5 chars is no valid format
        let result = "#FFFFF".parse::<Rgba>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));

        // Empty string
        let result = "".parse::<Rgba>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));

        // Just hash
        let result = "#".parse::<Rgba>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));
    }
}
