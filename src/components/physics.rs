use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Force/torque accumulator for one rigid body. Everything pushed here is
/// consumed by the integrator and cleared at the end of the physics step.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub inertia: Matrix3<f64>,
    pub inertia_inv: Matrix3<f64>,
    /// Linear damping rate [1/s]
    pub linear_drag: f64,
    /// Angular damping rate [1/s]
    pub angular_drag: f64,
    pub net_force: Vector3<f64>,
    pub net_torque: Vector3<f64>,
    pub forces: Vec<Force>,
    pub torques: Vec<Vector3<f64>>,
}

/// A world-frame force applied through the centre of mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
    Gravitational,
    Dash,
}

impl PhysicsComponent {
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Self {
        let inertia_inv = inertia.try_inverse().unwrap_or(Matrix3::identity());
        Self {
            mass,
            inertia,
            inertia_inv,
            linear_drag: 0.0,
            angular_drag: 0.05,
            net_force: Vector3::zeros(),
            net_torque: Vector3::zeros(),
            forces: Vec::new(),
            torques: Vec::new(),
        }
    }

    pub fn with_drag(mut self, linear_drag: f64, angular_drag: f64) -> Self {
        self.linear_drag = linear_drag;
        self.angular_drag = angular_drag;
        self
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn add_torque(&mut self, torque: Vector3<f64>) {
        self.torques.push(torque);
    }

    /// Sum of every queued force of the given category.
    pub fn total_force(&self, category: ForceCategory) -> Vector3<f64> {
        self.forces
            .iter()
            .filter(|f| f.category == category)
            .fold(Vector3::zeros(), |acc, f| acc + f.vector)
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.torques.clear();
        self.net_force = Vector3::zeros();
        self.net_torque = Vector3::zeros();
    }
}
