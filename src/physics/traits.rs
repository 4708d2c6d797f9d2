use nalgebra::Vector3;

use crate::components::ForceCategory;

/// The slice of a rigid body the flight model reads and writes. The solver
/// owns integration; forces and torques pushed here are world-frame and
/// accumulate until the solver's next step.
pub trait RigidBody {
    fn mass(&self) -> f64;
    fn velocity(&self) -> Vector3<f64>;

    // World-space unit axes of the body.
    fn forward(&self) -> Vector3<f64>;
    fn right(&self) -> Vector3<f64>;
    fn up(&self) -> Vector3<f64>;

    fn angular_drag(&self) -> f64;
    fn set_angular_drag(&mut self, drag: f64);

    fn add_force(&mut self, force: Vector3<f64>, category: ForceCategory);
    fn add_torque(&mut self, torque: Vector3<f64>);
}
