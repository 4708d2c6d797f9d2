mod config;
mod input;
mod state;

pub use config::{ConfigError, FlightTuning, VehicleConfig};
pub use input::{ControlAxis, ControlButton, ControlSample, InputSource};
pub use state::{DashCharge, DashRequest, DashSide, DashSlot, VehicleState};

use bevy::prelude::*;

/// Arcade flight model for one vehicle.
///
/// Call [`FlightController::sample`] once per visual frame and
/// [`FlightController::integrate`] once per physics step, in that order. Dash
/// requests raised by a sample are consumed by the next integrate.
#[derive(Component, Debug, Clone)]
pub struct FlightController {
    pub(crate) config: VehicleConfig,
    pub state: VehicleState,
}

impl FlightController {
    /// Fails if the config cannot drive the model (see [`VehicleConfig::validate`]).
    pub fn new(config: VehicleConfig, initial_angular_drag: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = VehicleState::new(&config, initial_angular_drag);
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }
}
