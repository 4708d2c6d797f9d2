use bevy::prelude::*;

use crate::plugins::{FlightSet, StartupStage};
use crate::resources::InputFrame;
use crate::systems::{hide_cursor_system, quit_on_escape_system};

/// Cursor and shutdown handling for interactive runs.
pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputFrame>()
            .add_systems(
                Startup,
                hide_cursor_system.in_set(StartupStage::BuildUtilities),
            )
            .add_systems(Update, quit_on_escape_system.after(FlightSet::Input));
    }
}
