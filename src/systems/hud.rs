use bevy::prelude::*;

use crate::components::{
    FlightController, HudText, PlayerController, SpatialComponent, Thruster,
};
use crate::utils::{KMH_PER_MS, MAX_THROTTLE};

/// Values shown on the flight readout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudReading {
    /// [%]
    pub throttle: f64,
    /// [m/s]
    pub airspeed: f64,
    /// [m]
    pub altitude: f64,
    pub dashes: u32,
}

impl HudReading {
    pub fn new(controller: &FlightController, spatial: &SpatialComponent) -> Self {
        Self {
            throttle: controller.state.throttle,
            airspeed: spatial.velocity.norm(),
            altitude: spatial.position.y,
            dashes: controller.state.dash_charge.whole_dashes(),
        }
    }
}

/// Halves round away from zero.
pub fn format_hud(reading: &HudReading) -> String {
    format!(
        "Throttle: {:.0}%\nAirSpeed: {:.0} km/h\nAltitude: {:.0}m\nDashes: {}",
        reading.throttle.round(),
        (reading.airspeed * KMH_PER_MS).round(),
        reading.altitude.round(),
        reading.dashes
    )
}

/// Uniform exhaust scale for a throttle percentage.
pub fn thruster_scale(throttle: f64) -> f32 {
    (throttle / MAX_THROTTLE) as f32
}

pub fn hud_text_system(
    player: Query<(&FlightController, &SpatialComponent), With<PlayerController>>,
    mut hud: Query<&mut Text, With<HudText>>,
) {
    let Ok((controller, spatial)) = player.get_single() else {
        return;
    };
    let text = format_hud(&HudReading::new(controller, spatial));
    for mut hud_text in hud.iter_mut() {
        hud_text.0.clone_from(&text);
    }
}

pub fn thruster_scale_system(
    player: Query<&FlightController, With<PlayerController>>,
    mut thrusters: Query<&mut Transform, With<Thruster>>,
) {
    let Ok(controller) = player.get_single() else {
        return;
    };
    let scale = Vec3::splat(thruster_scale(controller.state.throttle));
    for mut transform in thrusters.iter_mut() {
        transform.scale = scale;
    }
}
