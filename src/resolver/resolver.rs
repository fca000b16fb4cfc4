//! Nearest-color resolver with memoization cache.

use std::collections::HashMap;
use std::sync::Arc;

use super::options::ResolverOptions;
use crate::color::Rgba;
use crate::palette::Palette;

/// Instrumentation counters for a [`NearestColorResolver`].
///
/// Counters are cumulative over the resolver's lifetime. They exist so that
/// cache behavior is observable in tests and diagnostics; they have no
/// effect on resolution results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    /// Queries answered from the cache.
    pub hits: u64,
    /// Queries that required a palette scan.
    pub misses: u64,
    /// Individual color-distance evaluations performed across all scans.
    ///
    /// A cache hit performs zero evaluations; a full scan performs one per
    /// palette entry; an exact-match short-circuit stops the count early.
    pub distance_evals: u64,
}

/// Resolves arbitrary colors to their nearest palette entry, memoizing
/// every mapping.
///
/// This is the computational hot path of error diffusion dithering: it is
/// called once per pixel, potentially millions of times per image. The first
/// query for a color pays for a linear scan of the palette; every repeat of
/// the same color (bit-exact) is a single hash lookup.
///
/// # Result guarantees
///
/// - The returned color is always a palette member.
/// - It minimizes Euclidean distance over the RGBA vector to the query
///   color across all palette entries.
/// - Ties go to the entry with the lowest palette index.
/// - Results are deterministic and independent of query order.
///
/// # Cache growth
///
/// The cache is never evicted: it holds one entry per distinct color ever
/// queried, which for pathological inputs (error diffusion against a small
/// palette can produce a distinct adjusted color per pixel) is bounded only
/// by the pixel count. Discard the resolver, or construct one per image, to
/// release the memory.
///
/// # Concurrency
///
/// [`resolve()`](Self::resolve) takes `&mut self`; the cache is
/// single-writer state. For parallel processing, give each worker its own
/// resolver over a shared palette:
///
/// ```
/// use std::sync::Arc;
/// use palette_match::{NearestColorResolver, Palette, Rgba};
///
/// let palette = Arc::new(Palette::from_hex(&["#000", "#FFF"]).unwrap());
///
/// // One resolver per worker, one shared read-only palette.
/// let mut worker_a = NearestColorResolver::new(Arc::clone(&palette));
/// let mut worker_b = NearestColorResolver::new(Arc::clone(&palette));
///
/// let c = Rgba::new(0.2, 0.2, 0.2, 1.0);
/// assert_eq!(worker_a.resolve(c), worker_b.resolve(c));
/// ```
#[derive(Debug)]
pub struct NearestColorResolver {
    palette: Arc<Palette>,
    // Keyed on channel bit patterns: f32 is neither Eq nor Hash, and cache
    // identity must be bit-exact, not approximate.
    cache: HashMap<[u32; 4], Rgba>,
    options: ResolverOptions,
    stats: ResolverStats,
}

impl NearestColorResolver {
    /// Create a resolver over the given palette with default options.
    ///
    /// Accepts either an owned [`Palette`] or an `Arc<Palette>` shared with
    /// other resolvers.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_match::{NearestColorResolver, Palette, Rgba};
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
    /// let mut resolver = NearestColorResolver::new(palette);
    ///
    /// let nearest = resolver.resolve(Rgba::from_u8(30, 30, 30, 255));
    /// assert_eq!(nearest.to_bytes(), [0, 0, 0, 255]);
    /// ```
    pub fn new(palette: impl Into<Arc<Palette>>) -> Self {
        Self::with_options(palette, ResolverOptions::default())
    }

    /// Create a resolver with explicit options.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_match::{NearestColorResolver, Palette, ResolverOptions};
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
    /// let options = ResolverOptions::new().cache_capacity(1 << 16);
    /// let resolver = NearestColorResolver::with_options(palette, options);
    /// assert_eq!(resolver.cache_len(), 0);
    /// ```
    pub fn with_options(palette: impl Into<Arc<Palette>>, options: ResolverOptions) -> Self {
        let palette = palette.into();

        tracing::debug!(
            palette_len = palette.len(),
            epsilon = options.epsilon,
            cache_capacity = options.cache_capacity,
            "nearest-color resolver created"
        );

        Self {
            palette,
            cache: HashMap::with_capacity(options.cache_capacity),
            options,
            stats: ResolverStats::default(),
        }
    }

    /// Resolve a color to its nearest palette entry.
    ///
    /// Cache hits return immediately without any distance computation.
    /// Cache misses scan the palette linearly, memoize the winner, and
    /// return it. Either way the result is identical; only latency differs.
    ///
    /// This operation cannot fail: any color, including out-of-gamut values
    /// produced by error diffusion, resolves to some palette entry.
    pub fn resolve(&mut self, color: Rgba) -> Rgba {
        let key = color.to_bits();

        if let Some(&cached) = self.cache.get(&key) {
            self.stats.hits += 1;
            return cached;
        }

        self.stats.misses += 1;
        let chosen = self.scan(color);

        // First writer wins: never overwrite an existing entry, and return
        // whatever is stored.
        *self.cache.entry(key).or_insert(chosen)
    }

    /// Linear palette scan for the nearest entry.
    ///
    /// Squared distances preserve ordering, so the square root is skipped.
    /// Strict less-than keeps the lowest-index entry on ties. A running
    /// best within epsilon of zero is an exact match and ends the scan.
    fn scan(&mut self, color: Rgba) -> Rgba {
        let epsilon_squared = self.options.epsilon * self.options.epsilon;

        let mut best = self.palette.color(0);
        let mut best_dist = f32::INFINITY;

        for &candidate in self.palette.colors() {
            self.stats.distance_evals += 1;
            let dist = color.distance_squared(candidate);

            if dist < best_dist {
                best = candidate;
                best_dist = dist;

                if dist <= epsilon_squared {
                    break;
                }
            }
        }

        best
    }

    /// The palette this resolver matches against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of distinct colors memoized so far.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Cumulative instrumentation counters.
    #[inline]
    pub fn stats(&self) -> ResolverStats {
        self.stats
    }
}
