use thiserror::Error;

use crate::components::flight::ConfigError;

/// Setup failures. None of these are recoverable once the simulation is running.
#[derive(Error, Debug)]
pub enum FlyerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Camera rig needs at least one point of view")]
    NoPointsOfView,

    #[error("Point of view {index} is out of range ({count} available)")]
    PointOfViewOutOfRange { index: usize, count: usize },
}
