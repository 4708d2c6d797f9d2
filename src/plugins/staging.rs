use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildUtilities,
    BuildAircraft,
    /// Scene dressing that hangs off the aircraft (meshes, points of view).
    BuildScene,
    BuildCameras,
    BuildHud,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::BuildUtilities,
                StartupStage::BuildAircraft,
                StartupStage::BuildScene,
                StartupStage::BuildCameras,
                StartupStage::BuildHud,
            )
                .chain(),
        );
    }
}
