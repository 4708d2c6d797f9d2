use serde::{Deserialize, Serialize};

/// Continuous control axes. Values are roughly in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlAxis {
    Roll,
    Pitch,
    Yaw,
    ThrottleUp,
    ThrottleDown,
}

impl ControlAxis {
    pub const ALL: [ControlAxis; 5] = [
        ControlAxis::Roll,
        ControlAxis::Pitch,
        ControlAxis::Yaw,
        ControlAxis::ThrottleUp,
        ControlAxis::ThrottleDown,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Discrete buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlButton {
    /// Either yaw direction; the yaw axis sign tells which side was tapped.
    Yaw,
    CameraCycle,
    Quit,
}

impl ControlButton {
    pub const ALL: [ControlButton; 3] = [
        ControlButton::Yaw,
        ControlButton::CameraCycle,
        ControlButton::Quit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Polled input device. Implementations report the state of the current frame;
/// nothing is queued between frames.
pub trait InputSource {
    fn axis(&self, axis: ControlAxis) -> f64;

    fn pressed(&self, button: ControlButton) -> bool;

    /// True only on the frame the button went down.
    fn just_pressed(&self, button: ControlButton) -> bool;
}

/// Stick and trigger values captured by the last sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSample {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub throttle_up: f64,
    pub throttle_down: f64,
}

impl Default for ControlSample {
    /// Centred sticks, throttle triggers at rest.
    fn default() -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            throttle_up: crate::utils::IDLE_AXIS_SENTINEL,
            throttle_down: crate::utils::IDLE_AXIS_SENTINEL,
        }
    }
}

impl ControlSample {
    /// Reads every axis, clamping untrusted device values into [-1, 1].
    pub fn read(input: &impl InputSource) -> Self {
        let read = |axis| sanitize_axis(input.axis(axis));
        Self {
            roll: read(ControlAxis::Roll),
            pitch: read(ControlAxis::Pitch),
            yaw: read(ControlAxis::Yaw),
            throttle_up: read(ControlAxis::ThrottleUp),
            throttle_down: read(ControlAxis::ThrottleDown),
        }
    }
}

fn sanitize_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
