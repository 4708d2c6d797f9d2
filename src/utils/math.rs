use bevy::math::Vec3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Step `current` toward `target` by at most `max_delta`, landing exactly on
/// `target` once it is within reach.
#[inline]
pub fn approach(current: f64, target: f64, max_delta: f64) -> f64 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(diff)
    }
}

/// Vector version of [`approach`]: moves along the straight line to `target`
/// without overshooting.
pub fn move_towards(current: Vec3, target: Vec3, max_distance: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_distance || distance == 0.0 {
        target
    } else {
        current + to_target / distance * max_distance
    }
}
