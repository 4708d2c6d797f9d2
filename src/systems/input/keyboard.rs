use bevy::prelude::*;

use crate::components::flight::{ControlAxis, ControlButton, InputSource};
use crate::resources::{AxisSmoothing, InputBindings, InputFrame, KeyPair};
use crate::utils::{approach, IDLE_AXIS_SENTINEL};

/// Raw value of a key pair: +1, -1, or 0 when neither or both are held.
pub fn key_pair_value(keyboard: &ButtonInput<KeyCode>, pair: &KeyPair) -> f64 {
    let mut value = 0.0;
    if keyboard.pressed(pair.positive) {
        value += 1.0;
    }
    if keyboard.pressed(pair.negative) {
        value -= 1.0;
    }
    value
}

/// Eases a digital axis the way analog sticks feel: ramps toward a held key,
/// decays to zero on release.
pub fn smooth_axis(current: f64, raw: f64, smoothing: &AxisSmoothing, dt: f64) -> f64 {
    if raw == 0.0 {
        return approach(current, 0.0, smoothing.gravity * dt);
    }
    let start = if smoothing.snap && current != 0.0 && current.signum() != raw.signum() {
        0.0
    } else {
        current
    };
    approach(start, raw, smoothing.sensitivity * dt)
}

/// Keyboard stands in for analog triggers: fully pulled while held, at the
/// idle sentinel otherwise.
pub fn trigger_value(keyboard: &ButtonInput<KeyCode>, key: KeyCode) -> f64 {
    if keyboard.pressed(key) {
        1.0
    } else {
        IDLE_AXIS_SENTINEL
    }
}

/// Polls the keyboard into the shared [`InputFrame`].
pub fn keyboard_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    time: Res<Time>,
    mut frame: ResMut<InputFrame>,
) {
    let dt = time.delta_secs_f64();
    frame.begin_frame();

    for axis in [ControlAxis::Roll, ControlAxis::Pitch, ControlAxis::Yaw] {
        let Some(pair) = bindings.pair(axis) else {
            continue;
        };
        let raw = key_pair_value(&keyboard, pair);
        let current = frame.axis(axis);
        frame.set_axis(axis, smooth_axis(current, raw, &bindings.smoothing, dt));
    }

    frame.set_axis(
        ControlAxis::ThrottleUp,
        trigger_value(&keyboard, bindings.throttle_up),
    );
    frame.set_axis(
        ControlAxis::ThrottleDown,
        trigger_value(&keyboard, bindings.throttle_down),
    );

    let yaw_keys = [bindings.yaw.positive, bindings.yaw.negative];
    frame.set_button(
        ControlButton::Yaw,
        keyboard.any_pressed(yaw_keys),
        keyboard.any_just_pressed(yaw_keys),
    );
    frame.set_button(
        ControlButton::CameraCycle,
        keyboard.pressed(bindings.camera_cycle),
        keyboard.just_pressed(bindings.camera_cycle),
    );
    frame.set_button(
        ControlButton::Quit,
        keyboard.pressed(bindings.quit),
        keyboard.just_pressed(bindings.quit),
    );
}
