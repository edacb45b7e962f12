//! Heightmap generation from seeded fractal noise.

use tracing::{debug, info};
use voxelite_utils::noise::{ImprovedNoise, OctaveNoise};
use voxelite_utils::random::{Random, legacy_random::LegacyRandom};

use crate::terrain::heightmap::Heightmap;
use crate::terrain::{FREQUENCY, MAX_HEIGHT, OCTAVES, PERSISTENCE, TERRAIN_SIZE};

/// Startup parameters for terrain generation.
///
/// Fixed at construction; there is no dynamic configuration surface.
#[derive(Debug, Clone)]
pub struct TerrainSettings {
    /// World seed. Equal seeds always produce equal terrain.
    pub seed: u64,
    /// Grid side length in columns.
    pub size: usize,
    /// Maximum column height in blocks.
    pub max_height: u32,
    /// Number of noise octaves to compose.
    pub octaves: u32,
    /// Base noise frequency.
    pub frequency: f64,
    /// Per-octave amplitude decay.
    pub persistence: f64,
}

impl TerrainSettings {
    /// Default settings with the given seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            size: TERRAIN_SIZE,
            max_height: MAX_HEIGHT,
            octaves: OCTAVES,
            frequency: FREQUENCY,
            persistence: PERSISTENCE,
        }
    }
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

/// One-shot terrain generator.
///
/// Owns the seeded noise stack. Built once at startup; the produced
/// [`Heightmap`] is immutable afterwards.
pub struct TerrainGenerator {
    noise: OctaveNoise,
    settings: TerrainSettings,
}

impl TerrainGenerator {
    /// Create a generator, seeding the permutation table from the settings.
    #[must_use]
    pub fn new(settings: TerrainSettings) -> Self {
        let mut rng = LegacyRandom::from_seed(settings.seed);
        let noise = OctaveNoise::new(
            ImprovedNoise::new(&mut rng),
            settings.octaves,
            settings.frequency,
            settings.persistence,
        );
        Self { noise, settings }
    }

    /// Sample the raw (unsmoothed) heightmap.
    ///
    /// Every cell is `floor(fractal(i, j) * max_height)`; the fractal
    /// output in `[0, 1]` keeps heights within `[0, max_height]` without
    /// explicit clamping.
    #[must_use]
    pub fn generate(&self) -> Heightmap {
        let size = self.settings.size;
        let max_height = f64::from(self.settings.max_height);
        let mut heights = Vec::with_capacity(size * size);

        for i in 0..size {
            for j in 0..size {
                let value = self.noise.sample(i as f64, j as f64);
                heights.push((value * max_height) as u32);
            }
        }

        debug!(size, "sampled raw heightmap");
        Heightmap::from_raw(size, heights)
    }

    /// Run the full startup pipeline: generate, then smooth once.
    #[must_use]
    pub fn build(&self) -> Heightmap {
        let raw = self.generate();
        let smoothed = raw.smoothed();
        info!(
            seed = self.settings.seed,
            size = self.settings.size,
            max_height = self.settings.max_height,
            "terrain generated"
        );
        smoothed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_stay_within_bounds_at_full_size() {
        let generator = TerrainGenerator::new(TerrainSettings::with_seed(42));
        let grid = generator.generate();

        assert_eq!(grid.size(), 100);
        assert_eq!(grid.as_slice().len(), 100 * 100);
        for &h in grid.as_slice() {
            assert!(h <= 24, "height {h} exceeds the maximum");
        }
    }

    #[test]
    fn same_seed_reproduces_terrain() {
        let a = TerrainGenerator::new(TerrainSettings::with_seed(7)).build();
        let b = TerrainGenerator::new(TerrainSettings::with_seed(7)).build();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_give_different_terrain() {
        let a = TerrainGenerator::new(TerrainSettings::with_seed(1)).build();
        let b = TerrainGenerator::new(TerrainSettings::with_seed(2)).build();
        assert_ne!(a, b);
    }

    #[test]
    fn smoothing_flattens_local_variance() {
        let generator = TerrainGenerator::new(TerrainSettings::with_seed(42));
        let raw = generator.generate();
        let smoothed = raw.smoothed();

        let spread = |grid: &Heightmap| {
            let min = grid.as_slice().iter().min().copied().unwrap_or(0);
            let max = grid.as_slice().iter().max().copied().unwrap_or(0);
            max - min
        };
        assert!(spread(&smoothed) <= spread(&raw));
    }
}
