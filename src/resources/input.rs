use bevy::prelude::*;

use crate::components::flight::{ControlAxis, ControlButton, InputSource};
use crate::utils::IDLE_AXIS_SENTINEL;

/// How a keyboard-driven axis eases toward its raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSmoothing {
    /// Rate toward a held key's value [1/s]
    pub sensitivity: f64,
    /// Rate back to zero once released [1/s]
    pub gravity: f64,
    /// Jump to zero first when the held direction reverses.
    pub snap: bool,
}

impl Default for AxisSmoothing {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
            snap: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    pub positive: KeyCode,
    pub negative: KeyCode,
}

/// Keyboard layout for the flight controls.
///
/// With the Y-up body frame, positive roll lifts the right wing, positive
/// pitch raises the nose and positive yaw swings the nose toward -X.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputBindings {
    pub roll: KeyPair,
    pub pitch: KeyPair,
    pub yaw: KeyPair,
    pub throttle_up: KeyCode,
    pub throttle_down: KeyCode,
    pub camera_cycle: KeyCode,
    pub quit: KeyCode,
    pub smoothing: AxisSmoothing,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            roll: KeyPair {
                positive: KeyCode::KeyA,
                negative: KeyCode::KeyD,
            },
            pitch: KeyPair {
                positive: KeyCode::KeyS,
                negative: KeyCode::KeyW,
            },
            yaw: KeyPair {
                positive: KeyCode::KeyQ,
                negative: KeyCode::KeyE,
            },
            throttle_up: KeyCode::ShiftLeft,
            throttle_down: KeyCode::ControlLeft,
            camera_cycle: KeyCode::KeyC,
            quit: KeyCode::Escape,
            smoothing: AxisSmoothing::default(),
        }
    }
}

impl InputBindings {
    pub fn pair(&self, axis: ControlAxis) -> Option<&KeyPair> {
        match axis {
            ControlAxis::Roll => Some(&self.roll),
            ControlAxis::Pitch => Some(&self.pitch),
            ControlAxis::Yaw => Some(&self.yaw),
            ControlAxis::ThrottleUp | ControlAxis::ThrottleDown => None,
        }
    }
}

/// Control state for the current visual frame. Written by the input pollers,
/// read by anything that takes an [`InputSource`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputFrame {
    axes: [f64; 5],
    pressed: [bool; 3],
    just_pressed: [bool; 3],
}

impl Default for InputFrame {
    fn default() -> Self {
        let mut axes = [0.0; 5];
        axes[ControlAxis::ThrottleUp.index()] = IDLE_AXIS_SENTINEL;
        axes[ControlAxis::ThrottleDown.index()] = IDLE_AXIS_SENTINEL;
        Self {
            axes,
            pressed: [false; 3],
            just_pressed: [false; 3],
        }
    }
}

impl InputFrame {
    pub fn set_axis(&mut self, axis: ControlAxis, value: f64) {
        self.axes[axis.index()] = value;
    }

    pub fn set_button(&mut self, button: ControlButton, pressed: bool, just_pressed: bool) {
        self.pressed[button.index()] = pressed;
        self.just_pressed[button.index()] = just_pressed;
    }

    /// Clears the edge flags. Axis values carry over so smoothing can build
    /// on them.
    pub fn begin_frame(&mut self) {
        self.just_pressed = [false; 3];
    }
}

impl InputSource for InputFrame {
    fn axis(&self, axis: ControlAxis) -> f64 {
        self.axes[axis.index()]
    }

    fn pressed(&self, button: ControlButton) -> bool {
        self.pressed[button.index()]
    }

    fn just_pressed(&self, button: ControlButton) -> bool {
        self.just_pressed[button.index()]
    }
}
