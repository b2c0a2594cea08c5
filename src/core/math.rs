// Math utilities and helper functions

use glam::Vec3;

/// Lengths below this are treated as zero when normalizing directions
pub const DIRECTION_EPSILON: f32 = 1e-6;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Check if two f32 values are approximately equal
#[allow(dead_code)]
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Normalize `v`, substituting `fallback` for near-zero or non-finite results
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    if v.length() < DIRECTION_EPSILON {
        return fallback;
    }
    let n = v.normalize();
    if n.is_nan() {
        fallback
    } else {
        n
    }
}

/// Unit direction on the XZ plane for a yaw angle in degrees (0 = +Z)
pub fn direction_from_yaw(yaw_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Yaw angle in degrees that faces along `dir` (inverse of `direction_from_yaw`)
pub fn yaw_from_direction(dir: Vec3) -> f32 {
    dir.x.atan2(dir.z).to_degrees()
}

/// Spherical-to-Cartesian direction for yaw/pitch in degrees
pub fn direction_from_yaw_pitch(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let (yaw, pitch) = (yaw_deg.to_radians(), pitch_deg.to_radians());
    Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos())
}
