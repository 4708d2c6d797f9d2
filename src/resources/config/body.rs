use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Rigid-body properties of the player aircraft and where it starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// [kg]
    pub mass: f64,
    /// Principal moments of inertia about right, up and forward [kg*m^2]
    pub inertia: Vector3<f64>,
    pub linear_drag: f64,
    /// Baseline angular drag; the flight model ramps from here.
    pub angular_drag: f64,
    pub start_position: Vector3<f64>,
    /// Initial airspeed along the nose [m/s]
    pub start_speed: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            mass: 100.0,
            inertia: Vector3::new(50.0, 50.0, 50.0),
            linear_drag: 1.0,
            angular_drag: 2.0,
            start_position: Vector3::new(0.0, 100.0, 0.0),
            start_speed: 50.0,
        }
    }
}

impl BodyConfig {
    pub fn inertia_matrix(&self) -> Matrix3<f64> {
        Matrix3::from_diagonal(&self.inertia)
    }
}
