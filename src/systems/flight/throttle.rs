use nalgebra::Vector3;

use crate::components::flight::{ControlSample, VehicleConfig};
use crate::utils::{approach, IDLE_AXIS_SENTINEL, MAX_THROTTLE, MIN_THROTTLE};

/// True when neither throttle axis is being driven by a device.
pub fn is_throttle_idle(controls: &ControlSample) -> bool {
    controls.throttle_up <= IDLE_AXIS_SENTINEL && controls.throttle_down <= IDLE_AXIS_SENTINEL
}

/// One physics step of throttle ramping.
///
/// Up and down presses each move the throttle one increment and may cancel out.
/// With both triggers idle the throttle drifts toward `throttle_rest` and holds
/// there once reached.
pub fn step_throttle(throttle: f64, controls: &ControlSample, config: &VehicleConfig) -> f64 {
    let increment = config.throttle_increment;
    let mut next = throttle;

    if controls.throttle_up > 0.0 {
        next += increment;
    }
    if controls.throttle_down > 0.0 {
        next -= increment;
    }
    if is_throttle_idle(controls) {
        next = approach(next, config.throttle_rest, increment);
    }

    next.clamp(MIN_THROTTLE, MAX_THROTTLE)
}

/// Thrust along the nose, which points down the body's `-forward` axis.
pub fn thrust_force(forward: &Vector3<f64>, throttle: f64, config: &VehicleConfig) -> Vector3<f64> {
    -forward * config.max_thrust * throttle
}
