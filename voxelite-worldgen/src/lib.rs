//! Terrain and day-cycle generation for the voxelite renderer.
//!
//! Two independent pipelines live here:
//!
//! - [`terrain`] - runs once at startup: fractal noise over a square grid
//!   into an integer heightmap, followed by a single smoothing pass. The
//!   result is immutable for the rest of the program's life.
//! - [`sky`] - runs once per frame: a circular sun orbit parameterized by
//!   elapsed time, and the sky color derived from the sun's elevation.
//!
//! Both are pure computation; the renderer consumes the outputs.

pub mod sky;
pub mod terrain;
