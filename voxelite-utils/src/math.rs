//! Scalar math helpers used by the noise stack.

/// Floor an `f64` to an `i32`.
///
/// `f64::floor` followed by a cast; kept as a named helper so the noise
/// code reads like the algorithm it implements.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    value.floor() as i32
}

/// Linear interpolation between `a` and `b` by `t`.
#[inline]
#[must_use]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Hermite smoothstep with edges, matching `glm::smoothstep`.
///
/// Remaps `value` linearly from `[edge0, edge1]` to `[0, 1]`, clamps,
/// then applies `3t^2 - 2t^3`.
#[inline]
#[must_use]
pub fn smoothstep(edge0: f32, edge1: f32, value: f32) -> f32 {
    let t = ((value - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
