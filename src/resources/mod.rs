pub mod config;
mod input;

pub use config::{BodyConfig, CameraConfig, FlyerConfig, PhysicsConfig};
pub use input::{AxisSmoothing, InputBindings, InputFrame, KeyPair};
