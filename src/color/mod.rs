//! Color types
//!
//! This module provides the [`Rgba`] value type used for palette entries
//! and resolver queries.

mod rgba;

pub use rgba::Rgba;
