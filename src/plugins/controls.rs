use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::resources::{InputBindings, InputFrame};
use crate::systems::keyboard_input_system;

/// Keyboard polling into [`InputFrame`]. Leave this out to drive the frame
/// from somewhere else.
pub struct ControlsPlugin {
    bindings: InputBindings,
}

impl Default for ControlsPlugin {
    fn default() -> Self {
        Self {
            bindings: InputBindings::default(),
        }
    }
}

impl ControlsPlugin {
    pub fn new(bindings: InputBindings) -> Self {
        Self { bindings }
    }
}

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.bindings.clone())
            .init_resource::<InputFrame>()
            .add_systems(Update, keyboard_input_system.in_set(FlightSet::Input));
    }
}
