use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::{
    DASH_CEILING_DIVISOR, DASH_FLOOR_DIVISOR, GRAVITY_COMPENSATION_SCALE, HIGH_G_THRESHOLD,
    LOW_INPUT_THRESHOLD,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid vehicle configuration: {0}")]
    ValidationError(String),
}

/// Author-set handling parameters for one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Throttle change per physics step [%].
    pub throttle_increment: f64,
    /// Throttle the vehicle settles at when no device drives the throttle [%].
    pub throttle_rest: f64,
    /// Thrust per percent of throttle.
    pub max_thrust: f64,
    /// Torque scaling for roll, pitch and yaw.
    pub responsiveness: f64,
    /// Extra pitch authority while the high-G combo is held.
    pub high_g_response: f64,
    /// Lift per unit of airspeed.
    pub lift: f64,
    /// Per-step angular drag multiplier while the sticks are centred.
    pub low_input_drag: f64,
    /// Nose-down pitch authority relative to nose-up.
    pub pitch_down_speed: f64,
    /// Yaw authority relative to `responsiveness`.
    pub yaw_speed: f64,
    /// Side force scaling when dashing.
    pub dash_force: f64,
    /// Window for a double tap to count as a dash [s].
    pub double_input_time: f64,
    /// Time to regenerate one dash [s].
    pub dash_recharge_time: f64,
    pub max_dashes: u32,
    pub tuning: FlightTuning,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            throttle_increment: 0.1,
            throttle_rest: 50.0,
            max_thrust: 200.0,
            responsiveness: 10.0,
            high_g_response: 1000.0,
            lift: 135.0,
            low_input_drag: 1.2,
            pitch_down_speed: 0.7,
            yaw_speed: 0.5,
            dash_force: 100.0,
            double_input_time: 0.2,
            dash_recharge_time: 1.0,
            max_dashes: 2,
            tuning: FlightTuning::default(),
        }
    }
}

impl VehicleConfig {
    /// Total charge a full dash meter holds, in seconds of recharge.
    pub fn dash_capacity(&self) -> f64 {
        f64::from(self.max_dashes) * self.dash_recharge_time
    }

    /// Rejects configurations the flight model cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("throttle_increment", self.throttle_increment),
            ("throttle_rest", self.throttle_rest),
            ("max_thrust", self.max_thrust),
            ("responsiveness", self.responsiveness),
            ("high_g_response", self.high_g_response),
            ("lift", self.lift),
            ("low_input_drag", self.low_input_drag),
            ("pitch_down_speed", self.pitch_down_speed),
            ("yaw_speed", self.yaw_speed),
            ("dash_force", self.dash_force),
            ("double_input_time", self.double_input_time),
            ("dash_recharge_time", self.dash_recharge_time),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.dash_recharge_time <= 0.0 {
            return Err(ConfigError::ValidationError(
                "dash_recharge_time must be greater than zero".to_string(),
            ));
        }
        if self.max_dashes < 1 {
            return Err(ConfigError::ValidationError(
                "max_dashes must be at least 1".to_string(),
            ));
        }
        self.tuning.validate()
    }
}

/// Empirical constants baked into the flight feel. Exposed so they can be
/// overridden from a config file, but the defaults are what the model was
/// tuned against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    pub gravity_compensation_scale: f64,
    pub dash_floor_divisor: f64,
    pub dash_ceiling_divisor: f64,
    pub high_g_threshold: f64,
    pub low_input_threshold: f64,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            gravity_compensation_scale: GRAVITY_COMPENSATION_SCALE,
            dash_floor_divisor: DASH_FLOOR_DIVISOR,
            dash_ceiling_divisor: DASH_CEILING_DIVISOR,
            high_g_threshold: HIGH_G_THRESHOLD,
            low_input_threshold: LOW_INPUT_THRESHOLD,
        }
    }
}

impl FlightTuning {
    fn validate(&self) -> Result<(), ConfigError> {
        // The floor divisor must be the larger one or the clamp range inverts.
        if !(self.dash_floor_divisor >= self.dash_ceiling_divisor && self.dash_ceiling_divisor > 0.0)
        {
            return Err(ConfigError::ValidationError(format!(
                "dash divisors must satisfy floor ({}) >= ceiling ({}) > 0",
                self.dash_floor_divisor, self.dash_ceiling_divisor
            )));
        }
        let finite = [
            ("gravity_compensation_scale", self.gravity_compensation_scale),
            ("high_g_threshold", self.high_g_threshold),
            ("low_input_threshold", self.low_input_threshold),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
