use bevy::prelude::*;

use crate::components::HudText;
use crate::plugins::{FlightSet, StartupStage};
use crate::systems::{hud_text_system, thruster_scale_system};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud.in_set(StartupStage::BuildHud))
            .add_systems(
                Update,
                (hud_text_system, thruster_scale_system).after(FlightSet::Sample),
            );
    }
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        HudText,
    ));
}
