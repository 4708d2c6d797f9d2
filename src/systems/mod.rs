pub mod camera;
pub mod flight;
mod global;
mod hud;
pub mod input;
pub mod physics;

pub use camera::{camera_follow_system, camera_target_system};
pub use flight::{flight_integrate_system, flight_sample_system};
pub use global::{hide_cursor_system, quit_on_escape_system};
pub use hud::{format_hud, hud_text_system, thruster_scale, thruster_scale_system, HudReading};
pub use input::keyboard_input_system;
pub use physics::{force_calculator_system, physics_integrator_system, sync_transform_system};
