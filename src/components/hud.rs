use bevy::prelude::*;

/// Text node showing the flight readout.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct HudText;

/// Exhaust effect scaled with throttle.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Thruster;
