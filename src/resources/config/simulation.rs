use super::{body::BodyConfig, camera::CameraConfig, physics::PhysicsConfig};
use crate::components::flight::{ConfigError, VehicleConfig};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to start a flight, loadable from one YAML file. Missing
/// sections and fields fall back to their defaults.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyerConfig {
    pub physics: PhysicsConfig,
    pub vehicle: VehicleConfig,
    pub camera: CameraConfig,
    pub body: BodyConfig,
}

impl FlyerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vehicle.validate()?;
        if !(self.physics.timestep.is_finite() && self.physics.timestep > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "physics.timestep must be positive, got {}",
                self.physics.timestep
            )));
        }
        if !(self.body.mass.is_finite() && self.body.mass > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "body.mass must be positive, got {}",
                self.body.mass
            )));
        }
        if !(self.camera.speed.is_finite() && self.camera.speed >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "camera.speed must be non-negative, got {}",
                self.camera.speed
            )));
        }
        Ok(())
    }
}
