pub mod body;
pub mod camera;
pub mod physics;
pub mod simulation;

pub use body::BodyConfig;
pub use camera::CameraConfig;
pub use physics::PhysicsConfig;
pub use simulation::FlyerConfig;
