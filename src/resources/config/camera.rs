use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// How fast the camera closes on its point of view [m/s]
    pub speed: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { speed: 200.0 }
    }
}
