//! Nearest-color resolution with memoization
//!
//! This module provides [`NearestColorResolver`], the per-pixel hot path of
//! an error diffusion pipeline, together with its [`ResolverOptions`]
//! configuration and [`ResolverStats`] instrumentation counters.

mod options;
mod resolver;

pub use options::ResolverOptions;
pub use resolver::{NearestColorResolver, ResolverStats};
