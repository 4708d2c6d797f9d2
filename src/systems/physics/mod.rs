mod force_calculator;
mod integrator;

pub use force_calculator::{calculate_net_forces_torques, force_calculator_system};
pub use integrator::{physics_integrator_system, sync_transform_system};
