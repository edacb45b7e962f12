//! Gradient noise primitives for terrain generation.
//!
//! Two layers build on each other:
//!
//! - [`ImprovedNoise`] - seeded 2D Perlin-style gradient noise
//! - [`OctaveNoise`] - multi-octave fractal composition of a base sampler
//!
//! Both are deterministic for a fixed seed and produce values in `[0, 1]`.

mod improved_noise;
mod octave_noise;

pub use improved_noise::ImprovedNoise;
pub use octave_noise::OctaveNoise;
