//! palette-match: memoizing nearest-color resolution for dithering pipelines
//!
//! This library provides the per-pixel hot path shared by error diffusion
//! dithering algorithms: given a fixed palette and an arbitrary input color,
//! find the palette entry with the smallest Euclidean distance to the input,
//! and memoize the mapping so repeated queries for the same color are a
//! single hash lookup.
//!
//! # Quick Start
//!
//! ```
//! use palette_match::{NearestColorResolver, Palette, Rgba};
//!
//! let colors = [Rgba::from_u8(0, 0, 0, 255), Rgba::from_u8(255, 255, 255, 255)];
//! let palette = Palette::new(&colors).unwrap();
//!
//! let mut resolver = NearestColorResolver::new(palette);
//! let nearest = resolver.resolve(Rgba::new(0.4, 0.4, 0.4, 1.0));
//!
//! assert_eq!(nearest.to_bytes(), [0, 0, 0, 255]); // dark grey snaps to black
//! ```
//!
//! # Role in a Dithering Pipeline
//!
//! An error diffusion algorithm walks an image in scan order. For each pixel
//! it adds the error accumulated from already-visited neighbors, asks the
//! resolver for the nearest palette color, writes that color to the output,
//! and diffuses the difference (input minus resolved) to not-yet-visited
//! neighbors through a kernel:
//!
//! ```text
//! pixel + accumulated error
//!     |
//!     v
//! resolve()  ----------------> output pixel (always a palette member)
//!     |
//!     v
//! error = input - resolved
//!     |
//!     v
//! diffuse to neighbors (kernel weights, external to this crate)
//! ```
//!
//! The traversal, the kernel, palette construction, and image I/O are all
//! external concerns. This crate owns exactly two things: the palette as an
//! immutable ordered color set, and the resolver with its memoization cache.
//!
//! # Determinism
//!
//! Dithered output must be reproducible, so resolution is fully
//! deterministic:
//!
//! - The returned color is always a palette member and always minimizes
//!   Euclidean distance over the 4-component RGBA vector.
//! - Ties are broken by palette order: among equidistant entries, the lowest
//!   index wins. A later entry only displaces the running best when it is
//!   strictly closer.
//! - Exact matches short-circuit the palette scan (an exact match cannot be
//!   beaten), which changes latency but never the result.
//! - The cache is write-once: a mapping is never updated after insertion, so
//!   a warm cache returns exactly what a cold scan computed.
//!
//! # Concurrency
//!
//! [`NearestColorResolver::resolve`] takes `&mut self`: the cache is
//! single-writer state and the borrow checker enforces that. For parallel
//! row processing, share the [`Palette`] through an `Arc` and give each
//! worker its own resolver. Caches do not need to be merged; correctness
//! does not depend on cache sharing.

pub mod color;
pub mod palette;
pub mod resolver;


pub use color::Rgba;
pub use palette::{Palette, PaletteError, ParseColorError};
pub use resolver::{NearestColorResolver, ResolverOptions, ResolverStats};
