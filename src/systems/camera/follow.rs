use bevy::prelude::*;

use crate::components::flight::{ControlButton, InputSource};
use crate::components::{CameraRig, PointOfView};
use crate::resources::InputFrame;

/// Per frame: cycle on the button edge, then aim at the selected point of view.
pub fn camera_target_system(
    mut rigs: Query<&mut CameraRig>,
    povs: Query<&GlobalTransform, With<PointOfView>>,
    input: Res<InputFrame>,
) {
    let cycle = input.just_pressed(ControlButton::CameraCycle);
    for mut rig in rigs.iter_mut() {
        if cycle {
            rig.follow.cycle();
            debug!("Camera switched to point of view {}", rig.follow.index());
        }

        let pov = match rig.current_pov() {
            Ok(pov) => pov,
            Err(e) => {
                error_once!("{e}");
                continue;
            }
        };
        let Ok(global) = povs.get(pov) else {
            warn_once!("Point of view {pov:?} has no global transform");
            continue;
        };
        let (_, rotation, translation) = global.to_scale_rotation_translation();
        rig.follow.set_target(translation, rotation);
    }
}

/// Per physics step: close on the target without overshooting.
pub fn camera_follow_system(mut rigs: Query<(&CameraRig, &mut Transform)>, time: Res<Time>) {
    let dt = time.delta_secs();
    for (rig, mut transform) in rigs.iter_mut() {
        rig.follow.step(&mut transform, rig.speed as f32, dt);
    }
}
