//! Day cycle: sun orbit and sky color.
//!
//! Evaluated once per frame from elapsed wall-clock time. Each frame is
//! independent of the previous one; the only input is the time value.

mod sky_color;
mod sun_orbit;

pub use sky_color::{NIGHT_COLOR, NOON_COLOR, sky_color};
pub use sun_orbit::{SunOrbit, SunState, facing_rotation};

/// Default orbital radius in world units.
pub const ORBIT_RADIUS: f32 = 64.0;
/// Default angular rate in degrees per second.
pub const DEGREES_PER_SECOND: f32 = 1.0;
