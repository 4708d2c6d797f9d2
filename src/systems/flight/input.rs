use bevy::log::debug;

use crate::components::flight::{
    ControlButton, ControlSample, DashRequest, DashSide, InputSource, VehicleConfig, VehicleState,
};

/// Both throttle triggers held past the threshold.
pub fn is_high_g(controls: &ControlSample, threshold: f64) -> bool {
    controls.throttle_up > threshold && controls.throttle_down > threshold
}

/// Records a yaw tap at `now` and reports whether it completed a double tap.
///
/// The timestamp is always updated, so a third quick tap chains off the second.
pub fn register_yaw_tap(
    state: &mut VehicleState,
    side: DashSide,
    now: f64,
    config: &VehicleConfig,
) -> bool {
    let last_tap = match side {
        DashSide::Right => &mut state.last_yaw_right_tap,
        DashSide::Left => &mut state.last_yaw_left_tap,
    };
    let is_double = last_tap.is_some_and(|previous| now - previous <= config.double_input_time);
    *last_tap = Some(now);

    if is_double {
        let overwritten = state.slot_mut(side).post(DashRequest { requested_at: now });
        debug!(
            "{:?} dash requested at {:.3}s{}",
            side,
            now,
            if overwritten.is_some() {
                " (replacing unconsumed request)"
            } else {
                ""
            }
        );
    }
    is_double
}

/// Frame-side half of the flight model: latch stick values, derive high-G and
/// detect double-tap dashes at the controller clock `now`.
pub fn sample_controls(
    state: &mut VehicleState,
    config: &VehicleConfig,
    input: &impl InputSource,
    now: f64,
) {
    let controls = ControlSample::read(input);
    state.high_g = is_high_g(&controls, config.tuning.high_g_threshold);

    if input.just_pressed(ControlButton::Yaw) {
        if controls.yaw > 0.0 {
            register_yaw_tap(state, DashSide::Right, now, config);
        } else if controls.yaw < 0.0 {
            register_yaw_tap(state, DashSide::Left, now, config);
        }
    }

    state.controls = controls;
}
