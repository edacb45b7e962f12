//! Time-parameterized circular sun orbit.

use glam::Vec3;

/// Circular orbit in the XY plane, centered on the world origin.
///
/// The position is a pure function of elapsed time: `angle = t * rate`,
/// `(R cos, R sin, 0)`. The cycle repeats every `360 / rate` seconds.
#[derive(Debug, Clone, Copy)]
pub struct SunOrbit {
    radius: f32,
    degrees_per_second: f32,
}

/// Sun position and derived elevation for one frame.
#[derive(Debug, Clone, Copy)]
pub struct SunState {
    /// World-space sun position; the renderer uses it as the light position.
    pub position: Vec3,
    /// Normalized elevation in `[0, 1]`: 0 directly below, 1 directly above.
    pub elevation: f32,
}

impl SunOrbit {
    /// Create an orbit with the given radius and angular rate.
    #[must_use]
    pub const fn new(radius: f32, degrees_per_second: f32) -> Self {
        Self {
            radius,
            degrees_per_second,
        }
    }

    /// Orbital radius in world units.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Seconds for one full revolution.
    #[must_use]
    pub const fn period_seconds(&self) -> f32 {
        360.0 / self.degrees_per_second
    }

    /// Sun state at `elapsed_seconds` since startup.
    #[must_use]
    pub fn state(&self, elapsed_seconds: f32) -> SunState {
        let angle = elapsed_seconds * self.degrees_per_second.to_radians();
        let position = Vec3::new(
            self.radius * angle.cos(),
            self.radius * angle.sin(),
            0.0,
        );
        SunState {
            position,
            elevation: (position.y + self.radius) / (2.0 * self.radius),
        }
    }
}

/// Rotation that turns an up-facing billboard toward the origin.
///
/// Returns `(angle, axis)` for a sun quad at `position`. When the sun
/// sits on the vertical axis the cross product degenerates to near-zero
/// length; the X axis is substituted so the rotation stays well-defined.
#[must_use]
pub fn facing_rotation(position: Vec3) -> (f32, Vec3) {
    let direction = (-position).normalize_or(Vec3::NEG_Y);
    let angle = direction.dot(Vec3::Y).clamp(-1.0, 1.0).acos();
    let axis = Vec3::Y.cross(direction);
    if axis.length() < 1e-4 {
        (angle, Vec3::X)
    } else {
        (angle, axis)
    }
}
