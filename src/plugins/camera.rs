use bevy::prelude::*;

use crate::components::{CameraRig, PointOfView};
use crate::plugins::{FlightSet, PhysicsSet, StartupStage};
use crate::resources::{CameraConfig, InputFrame};
use crate::systems::{camera_follow_system, camera_target_system};

/// A camera that chases whichever [`PointOfView`] is selected.
pub struct CameraPlugin {
    config: CameraConfig,
}

impl CameraPlugin {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }
}

impl Default for CameraPlugin {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<InputFrame>()
            .add_systems(Startup, spawn_camera.in_set(StartupStage::BuildCameras))
            .add_systems(Update, camera_target_system.after(FlightSet::Input))
            .add_systems(FixedUpdate, camera_follow_system.after(PhysicsSet::Sync));
    }
}

fn spawn_camera(
    mut commands: Commands,
    povs: Query<(Entity, &PointOfView)>,
    config: Res<CameraConfig>,
) {
    let mut ordered: Vec<(Entity, PointOfView)> = povs.iter().map(|(e, pov)| (e, *pov)).collect();
    ordered.sort_by_key(|(_, pov)| pov.order);
    let points_of_view: Vec<Entity> = ordered.into_iter().map(|(e, _)| e).collect();

    match CameraRig::new(points_of_view, config.speed) {
        Ok(rig) => {
            info!("Camera rig with {} points of view", rig.points_of_view().len());
            commands.spawn((Camera3d::default(), Transform::default(), rig));
        }
        Err(e) => error!("Not spawning camera: {e}"),
    }
}
