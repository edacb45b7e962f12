//! Voxel terrain surface generation.
//!
//! The pipeline is permutation table → gradient noise → octave
//! composition → integer heightmap → one smoothing pass, executed once
//! at startup by [`TerrainGenerator`]. The smoothed [`Heightmap`] is the
//! only output the renderer sees: one stack of unit cubes per column.

mod generator;
mod heightmap;

pub use generator::{TerrainGenerator, TerrainSettings};
pub use heightmap::Heightmap;

/// Default grid side length in columns.
pub const TERRAIN_SIZE: usize = 100;
/// Default maximum column height in blocks.
pub const MAX_HEIGHT: u32 = 24;
/// Default number of noise octaves.
pub const OCTAVES: u32 = 4;
/// Default base noise frequency.
pub const FREQUENCY: f64 = 0.02;
/// Default per-octave amplitude decay.
pub const PERSISTENCE: f64 = 0.5;
