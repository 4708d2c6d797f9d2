use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::flight::{ControlButton, InputSource};
use crate::resources::InputFrame;

pub fn hide_cursor_system(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor_options.visible = false;
    } else {
        debug!("No primary window, cursor left as is");
    }
}

/// Requests shutdown while the quit control is held.
pub fn quit_on_escape_system(input: Res<InputFrame>, mut exit: EventWriter<AppExit>) {
    if input.pressed(ControlButton::Quit) {
        info!("Quit requested");
        exit.send(AppExit::Success);
    }
}
