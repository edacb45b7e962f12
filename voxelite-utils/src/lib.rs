//! Numeric primitives shared across the voxelite workspace.
//!
//! Everything in this crate is pure computation: a deterministic seeded
//! random source, floating-point math helpers, and the gradient noise
//! stack used by terrain generation. There is no I/O and no global state.

pub mod math;
pub mod noise;
pub mod random;
