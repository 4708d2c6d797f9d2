use crate::components::flight::{ControlSample, VehicleConfig};
use crate::utils::{MAX_ANGULAR_DRAG, MIN_ANGULAR_DRAG};

/// All three sticks strictly inside (-threshold, threshold).
pub fn is_low_input(controls: &ControlSample, threshold: f64) -> bool {
    [controls.roll, controls.pitch, controls.yaw]
        .iter()
        .all(|v| v.abs() < threshold)
}

/// Angular drag for the next step. Compounds by `low_input_drag` every step
/// the sticks stay centred, snaps back to `baseline` as soon as any stick
/// leaves neutral.
pub fn ramp_angular_drag(
    current: f64,
    baseline: f64,
    controls: &ControlSample,
    config: &VehicleConfig,
) -> f64 {
    let drag = if is_low_input(controls, config.tuning.low_input_threshold) {
        current * config.low_input_drag
    } else {
        baseline
    };
    drag.clamp(MIN_ANGULAR_DRAG, MAX_ANGULAR_DRAG)
}
