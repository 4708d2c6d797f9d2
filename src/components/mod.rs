pub mod camera;
mod controller;
pub mod flight;
mod hud;
pub mod physics;
pub mod spatial;

pub use camera::{CameraFollowState, CameraRig, PointOfView};
pub use controller::PlayerController;
pub use flight::FlightController;
pub use hud::{HudText, Thruster};
pub use physics::{Force, ForceCategory, PhysicsComponent};
pub use spatial::SpatialComponent;
