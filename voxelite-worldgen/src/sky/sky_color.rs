//! Sun-elevation-driven sky color.

use glam::Vec3;
use voxelite_utils::math::smoothstep;

/// Sky color while the sun is below the transition band.
pub const NIGHT_COLOR: Vec3 = Vec3::new(0.0, 0.0, 0.0);
/// Sky color while the sun is above the transition band.
pub const NOON_COLOR: Vec3 = Vec3::new(0.5, 0.6, 0.7);

/// Elevation below which the sky is pure night.
const NIGHT_THRESHOLD: f32 = 0.45;
/// Elevation above which the sky is pure noon.
const NOON_THRESHOLD: f32 = 0.65;

/// Sky color for the sun's current height above the orbit center.
///
/// `sun_y` is normalized against the orbital radius into an elevation in
/// `[0, 1]`, then gated through two thresholds: pure night below 0.45,
/// pure noon above 0.65, and a smoothstep blend between the two inside
/// the band. The blend is continuous with both constant branches at the
/// thresholds. There is no separate sunrise tint; dawn and dusk pass
/// through the same night-to-noon ramp.
#[must_use]
pub fn sky_color(sun_y: f32, radius: f32) -> Vec3 {
    let elevation = (sun_y + radius) / (2.0 * radius);

    if elevation < NIGHT_THRESHOLD {
        NIGHT_COLOR
    } else if elevation < NOON_THRESHOLD {
        let t = smoothstep(NIGHT_THRESHOLD, NOON_THRESHOLD, elevation);
        NIGHT_COLOR.lerp(NOON_COLOR, t)
    } else {
        NOON_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f32 = 64.0;

    /// Map a normalized elevation back to the `sun_y` that produces it.
    fn sun_y_for(elevation: f32) -> f32 {
        elevation * 2.0 * RADIUS - RADIUS
    }

    #[test]
    fn lowest_point_is_pure_night() {
        assert_eq!(sky_color(-RADIUS, RADIUS), NIGHT_COLOR);
    }

    #[test]
    fn highest_point_is_pure_noon() {
        assert_eq!(sky_color(RADIUS, RADIUS), NOON_COLOR);
    }

    #[test]
    fn continuous_at_the_night_threshold() {
        let below = sky_color(sun_y_for(0.45 - 1e-4), RADIUS);
        let at = sky_color(sun_y_for(0.45), RADIUS);
        assert!((below - at).length() < 1e-3);
        assert!((at - NIGHT_COLOR).length() < 1e-3);
    }

    #[test]
    fn continuous_at_the_noon_threshold() {
        let below = sky_color(sun_y_for(0.65 - 1e-4), RADIUS);
        let at = sky_color(sun_y_for(0.65), RADIUS);
        assert!((below - at).length() < 1e-3);
        assert!((at - NOON_COLOR).length() < 1e-3);
    }

    #[test]
    fn transition_band_blends_between_the_colors() {
        let mid = sky_color(sun_y_for(0.55), RADIUS);
        // Smoothstep midpoint: exactly halfway between night and noon
        assert!((mid - NIGHT_COLOR.lerp(NOON_COLOR, 0.5)).length() < 1e-4);
        for channel in [mid.x, mid.y, mid.z] {
            assert!(channel > 0.0);
        }
    }

    #[test]
    fn brightness_is_monotonic_in_elevation() {
        let mut previous = -1.0_f32;
        for step in 0..=100 {
            let elevation = step as f32 / 100.0;
            let color = sky_color(sun_y_for(elevation), RADIUS);
            let brightness = color.x + color.y + color.z;
            assert!(brightness >= previous);
            previous = brightness;
        }
    }
}
