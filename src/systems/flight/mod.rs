mod attitude;
mod controller;
mod dash;
mod drag;
mod input;
mod lift;
mod throttle;

#[cfg(test)]
pub(crate) mod testing;

pub use attitude::{attitude_torques, response_modifier, AttitudeTorques};
pub use controller::{flight_integrate_system, flight_sample_system, StepReport};
pub use dash::{dash_direction, dash_force_magnitude, process_dashes, DashOutcome};
pub use drag::{is_low_input, ramp_angular_drag};
pub use input::{is_high_g, register_yaw_tap, sample_controls};
pub use lift::{angle_of_attack_proxy, lift_forces, LiftForces};
pub use throttle::{is_throttle_idle, step_throttle, thrust_force};
