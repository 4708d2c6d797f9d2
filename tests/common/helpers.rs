use crate::common::TestApp;
use arcade_flyer::{
    components::{
        flight::{ControlAxis, ControlButton},
        PlayerController,
    },
    resources::InputFrame,
};

/// One frame with the yaw axis deflected and the yaw button going down.
pub fn tap_yaw(test_app: &mut TestApp, yaw: f64) {
    test_app.run_frame_with(|input| {
        input.set_axis(ControlAxis::Yaw, yaw);
        input.set_button(ControlButton::Yaw, true, true);
    });
    release_yaw(test_app.input_mut().into_inner());
}

fn release_yaw(input: &mut InputFrame) {
    input.set_axis(ControlAxis::Yaw, 0.0);
    input.set_button(ControlButton::Yaw, false, false);
}

/// One frame with `button` going down.
pub fn press(test_app: &mut TestApp, button: ControlButton) {
    test_app.run_frame_with(|input| input.set_button(button, true, true));
    test_app.input_mut().set_button(button, false, false);
}

/// Hands the aircraft to (or takes it from) the player.
pub fn set_player_active(test_app: &mut TestApp, active: bool) {
    let world = test_app.app.world_mut();
    let mut query = world.query::<&mut PlayerController>();
    query.single_mut(world).set_active(active);
}
