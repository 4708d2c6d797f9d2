use crate::components::PhysicsComponent;
use crate::resources::PhysicsConfig;
use bevy::prelude::*;
use nalgebra::Vector3;

/// Sums gravity and every queued force and torque into the net totals.
pub fn calculate_net_forces_torques(physics: &mut PhysicsComponent, gravity: &Vector3<f64>) {
    let mut net_force = gravity * physics.mass;
    for force in &physics.forces {
        net_force += force.vector;
    }
    let net_torque = physics
        .torques
        .iter()
        .fold(Vector3::zeros(), |acc, torque| acc + torque);

    physics.net_force = net_force;
    physics.net_torque = net_torque;
}

pub fn force_calculator_system(
    mut query: Query<&mut PhysicsComponent>,
    config: Res<PhysicsConfig>,
) {
    for mut physics in query.iter_mut() {
        calculate_net_forces_torques(&mut physics, &config.gravity);
    }
}
