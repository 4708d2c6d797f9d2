use nalgebra::Vector3;

use crate::components::{Force, ForceCategory, PhysicsComponent, SpatialComponent};
use crate::physics::RigidBody;

/// Borrowed view of an ECS body, handed to the flight model for one step.
pub struct BodyHandle<'a> {
    pub physics: &'a mut PhysicsComponent,
    pub spatial: &'a SpatialComponent,
}

impl<'a> BodyHandle<'a> {
    pub fn new(physics: &'a mut PhysicsComponent, spatial: &'a SpatialComponent) -> Self {
        Self { physics, spatial }
    }
}

impl RigidBody for BodyHandle<'_> {
    fn mass(&self) -> f64 {
        self.physics.mass
    }

    fn velocity(&self) -> Vector3<f64> {
        self.spatial.velocity
    }

    fn forward(&self) -> Vector3<f64> {
        self.spatial.forward()
    }

    fn right(&self) -> Vector3<f64> {
        self.spatial.right()
    }

    fn up(&self) -> Vector3<f64> {
        self.spatial.up()
    }

    fn angular_drag(&self) -> f64 {
        self.physics.angular_drag
    }

    fn set_angular_drag(&mut self, drag: f64) {
        self.physics.angular_drag = drag;
    }

    fn add_force(&mut self, force: Vector3<f64>, category: ForceCategory) {
        self.physics.add_force(Force {
            vector: force,
            category,
        });
    }

    fn add_torque(&mut self, torque: Vector3<f64>) {
        self.physics.add_torque(torque);
    }
}
