//! Multi-octave fractal composition of gradient noise.

use crate::noise::ImprovedNoise;

/// Fractal noise sampler summing several octaves of [`ImprovedNoise`].
///
/// Each octave doubles the sampling frequency and scales its amplitude
/// by the persistence factor. The running amplitude total is tracked so
/// the result can be normalized back into `[0, 1]` for any octave count.
#[derive(Debug, Clone)]
pub struct OctaveNoise {
    noise: ImprovedNoise,
    octaves: u32,
    frequency: f64,
    persistence: f64,
}

impl OctaveNoise {
    /// Create a fractal sampler over `noise`.
    ///
    /// `frequency` is the base (first octave) frequency; `persistence`
    /// is the per-octave amplitude decay.
    #[must_use]
    pub const fn new(noise: ImprovedNoise, octaves: u32, frequency: f64, persistence: f64) -> Self {
        Self {
            noise,
            octaves,
            frequency,
            persistence,
        }
    }

    /// Sample the composed noise at the given coordinates.
    ///
    /// Returns a value in `[0, 1]`. Normalization divides by the summed
    /// octave amplitudes, so the bound holds regardless of octave count
    /// or persistence - downstream height scaling depends on that.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.frequency;
        let mut amplitude = 1.0;
        let mut max_total = 0.0;

        for _ in 0..self.octaves {
            total += self.noise.sample(x * frequency, y * frequency) * amplitude;
            max_total += amplitude;
            frequency *= 2.0;
            amplitude *= self.persistence;
        }

        total / max_total
    }
}
