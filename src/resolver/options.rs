//! Resolver options and configuration.
//!
//! This module provides the [`ResolverOptions`] struct for configuring
//! nearest-color resolution behavior.

/// Default exact-match threshold, in true Euclidean distance units.
///
/// On the normalized RGBA cube this is well below the distance between any
/// two representable 8-bit colors (1/255 per channel), so the short-circuit
/// only fires for colors that round-trip to the same pixel value.
pub const DEFAULT_EPSILON: f32 = 1e-3;

/// Default initial capacity of the memoization cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Configuration options for nearest-color resolution.
///
/// The resolution policy knobs are deliberately explicit rather than baked-in
/// constants: the exact-match epsilon and the cache sizing are the only two
/// tunables, and both have defaults that match the behavior of a plain
/// uncached linear scan.
///
/// # Example
///
/// ```
/// use palette_match::ResolverOptions;
///
/// // Use defaults (recommended for most cases)
/// let options = ResolverOptions::new();
///
/// // Or customize with builder pattern
/// let options = ResolverOptions::new()
///     .epsilon(1e-4)
///     .cache_capacity(4096);
/// ```
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Exact-match short-circuit threshold, in true Euclidean distance units.
    ///
    /// When a palette entry lies within this distance of the query color the
    /// scan stops early and uses that entry. An exact match cannot be beaten
    /// by a later entry, so this changes latency but never the result.
    ///
    /// Internally the comparison happens on squared distances against
    /// `epsilon * epsilon`, which is equivalent.
    ///
    /// Default: [`DEFAULT_EPSILON`]
    pub epsilon: f32,

    /// Initial capacity of the memoization cache.
    ///
    /// The cache grows past this freely; the capacity only pre-sizes the
    /// allocation. Images with many distinct colors benefit from a larger
    /// starting capacity.
    ///
    /// Default: [`DEFAULT_CACHE_CAPACITY`]
    pub cache_capacity: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ResolverOptions {
    /// Create new resolver options with default values.
    ///
    /// This is equivalent to `ResolverOptions::default()` but more discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exact-match short-circuit threshold.
    ///
    /// # Arguments
    /// * `epsilon` - Threshold in true Euclidean distance units (non-negative)
    #[inline]
    pub fn epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the initial cache capacity.
    ///
    /// # Arguments
    /// * `capacity` - Number of cache entries to pre-allocate
    #[inline]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}
