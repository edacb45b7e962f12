//! Deterministic random sources for reproducible world generation.
//!
//! Terrain must be bit-for-bit reproducible from a seed across platforms,
//! so generation code never touches OS entropy. All randomness flows
//! through the [`Random`] trait, currently implemented by
//! [`legacy_random::LegacyRandom`].

pub mod legacy_random;

/// A seedable pseudo-random source with a deterministic output stream.
pub trait Random {
    /// Create a source from a seed. Equal seeds produce equal streams.
    fn from_seed(seed: u64) -> Self;

    /// Next pseudo-random `i32` over the full range.
    fn next_i32(&mut self) -> i32;

    /// Next pseudo-random `i32` uniform in `[0, bound)`.
    ///
    /// `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Next pseudo-random `f64` uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}
