//! Palette struct: an immutable, ordered sequence of distinct colors.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgba;

/// A fixed, ordered, non-empty set of representative colors.
///
/// A `Palette` is the set of colors a dithered output is constrained to.
/// It is validated and frozen at construction time: at least one entry,
/// no duplicates, no mutation afterwards.
///
/// # Ordering
///
/// Entry order is semantically significant. When two palette entries are
/// equidistant from a query color, [`NearestColorResolver`] returns the one
/// with the lower index. Reordering a palette therefore changes dithered
/// output even though the color set is the same.
///
/// # Sharing
///
/// `Palette` is read-only after construction, so it can be shared freely
/// across threads behind an `Arc`. [`NearestColorResolver`] stores its
/// palette that way; constructing one resolver per worker over a single
/// shared palette is the intended parallelism model.
///
/// [`NearestColorResolver`]: crate::resolver::NearestColorResolver
///
/// # Example
///
/// ```
/// use palette_match::{Palette, Rgba};
///
/// let colors = [Rgba::from_u8(0, 0, 0, 255), Rgba::from_u8(255, 255, 255, 255)];
/// let palette = Palette::new(&colors).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color(1).to_bytes(), [255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    // Fixed-size storage: the palette never grows after construction and
    // index-stable access is what the tie-break rule is defined on.
    colors: Box<[Rgba]>,
}

impl Palette {
    /// Create a new palette from a slice of colors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::Empty`])
    /// - `colors` contains a duplicate entry ([`PaletteError::DuplicateColor`]).
    ///   Duplicates are detected by channel bit pattern, the same equality
    ///   the resolver cache uses.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_match::{Palette, PaletteError, Rgba};
    ///
    /// let palette = Palette::new(&[Rgba::from_u8(255, 0, 0, 255)]).unwrap();
    /// assert_eq!(palette.len(), 1);
    ///
    /// let empty = Palette::new(&[]);
    /// assert!(matches!(empty, Err(PaletteError::Empty)));
    /// ```
    pub fn new(colors: &[Rgba]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(color.to_bits()) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        tracing::debug!(len = colors.len(), "palette constructed");

        Ok(Self {
            colors: colors.into(),
        })
    }

    /// Create a palette from hex color strings.
    ///
    /// Convenience constructor that parses strings like `"#FF0000"`,
    /// `"#F00"`, or `"#FF000080"` into [`Rgba`] colors and validates the
    /// palette.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any string is invalid, or
    /// other [`PaletteError`] variants for palette validation failures.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_match::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let colors: Vec<Rgba> = colors
            .iter()
            .map(|s| Rgba::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: this always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgba {
        self.colors[idx]
    }

    /// All palette colors, in tie-break priority order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}
