pub mod camera;
mod controls;
mod flight;
mod global;
mod hud;
mod physics;
mod staging;

pub use camera::CameraPlugin;
pub use controls::ControlsPlugin;
pub use flight::{FlightPlugin, FlightSet};
pub use global::LifecyclePlugin;
pub use hud::HudPlugin;
pub use physics::{PhysicsPlugin, PhysicsSet};
pub use staging::{StartupSequencePlugin, StartupStage};
