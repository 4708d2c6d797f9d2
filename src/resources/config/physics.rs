use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{DEFAULT_TIMESTEP, GRAVITY};

/// Host solver settings shared by every simulated body.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed physics step [s]
    pub timestep: f64,
    /// World gravity [m/s^2], Y-up
    pub gravity: Vector3<f64>,
    /// Linear speed limit [m/s]
    pub max_velocity: f64,
    /// Angular speed limit [rad/s]
    pub max_angular_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            gravity: Vector3::new(0.0, -GRAVITY, 0.0),
            max_velocity: 250.0,
            max_angular_velocity: 20.0,
        }
    }
}
