//! Voxelite entry point.
//!
//! Runs the startup terrain pipeline once, then steps the day cycle a
//! few frames and logs the per-frame light position / sky color pair a
//! renderer would consume. Rendering itself lives outside this
//! workspace; this binary exists to exercise the generation core.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use voxelite_worldgen::sky::{DEGREES_PER_SECOND, ORBIT_RADIUS, SunOrbit, sky_color};
use voxelite_worldgen::terrain::{TerrainGenerator, TerrainSettings};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("invalid seed '{arg}'"))?,
        None => 0,
    };

    let generator = TerrainGenerator::new(TerrainSettings::with_seed(seed));
    let heightmap = generator.build();

    let min = heightmap.as_slice().iter().min().copied().unwrap_or(0);
    let max = heightmap.as_slice().iter().max().copied().unwrap_or(0);
    info!(size = heightmap.size(), min, max, "heightmap ready");

    // One frame per quarter revolution, enough to show the full day cycle
    let orbit = SunOrbit::new(ORBIT_RADIUS, DEGREES_PER_SECOND);
    let quarter = orbit.period_seconds() / 4.0;
    for step in 0..4u32 {
        let elapsed = quarter * step as f32;
        let sun = orbit.state(elapsed);
        let color = sky_color(sun.position.y, orbit.radius());
        info!(
            elapsed,
            light_pos = ?sun.position,
            sky = ?color,
            elevation = sun.elevation,
            "day cycle frame"
        );
    }

    Ok(())
}
