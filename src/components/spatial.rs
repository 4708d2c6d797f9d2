use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Spatial state of a body in a Y-up world frame.
///
/// Body axes: `right` is +X, `up` is +Y and `forward` is +Z, each rotated by
/// `attitude`. Airframes fly nose-first along `-forward`, which lines up with
/// Bevy's `Transform::forward()`.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }

    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    /// Render-space transform for this state.
    pub fn to_transform(&self) -> Transform {
        let q = self.attitude.quaternion();
        Transform {
            translation: Vec3::new(
                self.position.x as f32,
                self.position.y as f32,
                self.position.z as f32,
            ),
            rotation: Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32),
            scale: Vec3::ONE,
        }
    }
}
