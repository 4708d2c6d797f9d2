use crate::components::{PhysicsComponent, SpatialComponent};
use crate::resources::PhysicsConfig;
use bevy::prelude::*;
use nalgebra::UnitQuaternion;

/// Integrates every body by one fixed step, then clears its force queues.
///
/// # Arguments
/// - `query`: Entities with `PhysicsComponent` and `SpatialComponent`.
/// - `config`: Physics configuration resource for the timestep and velocity limits.
pub fn physics_integrator_system(
    mut query: Query<(&mut PhysicsComponent, &mut SpatialComponent)>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    let max_vel = config.max_velocity;
    let max_ang_vel = config.max_angular_velocity;

    query.par_iter_mut().for_each(|(mut physics, mut spatial)| {
        integrate_state(&physics, &mut spatial, dt);
        apply_velocity_limits(&mut spatial, max_vel, max_ang_vel);
        physics.clear_forces();
    });
}

/// Semi-implicit Euler step. Net force and torque are world-frame; angular
/// velocity is kept in the body frame. Drag is applied as `v / (1 + dt * drag)`
/// so large drag values never reverse the motion.
pub(crate) fn integrate_state(physics: &PhysicsComponent, spatial: &mut SpatialComponent, dt: f64) {
    let acceleration = physics.net_force / physics.mass;
    spatial.velocity += acceleration * dt;
    spatial.velocity /= 1.0 + dt * physics.linear_drag;
    spatial.position += spatial.velocity * dt;

    let omega = spatial.angular_velocity;
    let torque_body = spatial.attitude.inverse_transform_vector(&physics.net_torque);
    let gyro_term = omega.cross(&(physics.inertia * omega));
    let angular_acceleration = physics.inertia_inv * (torque_body - gyro_term);
    spatial.angular_velocity += angular_acceleration * dt;
    spatial.angular_velocity /= 1.0 + dt * physics.angular_drag;

    if spatial.angular_velocity.norm() > 0.0 {
        let rotation = UnitQuaternion::from_scaled_axis(spatial.angular_velocity * dt);
        spatial.attitude = spatial.attitude * rotation;
        spatial.attitude = UnitQuaternion::from_quaternion(spatial.attitude.into_inner().normalize());
    }
}

/// Applies velocity and angular velocity limits to prevent excessive motion.
fn apply_velocity_limits(
    spatial: &mut SpatialComponent,
    max_velocity: f64,
    max_angular_velocity: f64,
) {
    let velocity_norm = spatial.velocity.norm();
    if velocity_norm > max_velocity {
        spatial.velocity *= max_velocity / velocity_norm;
    }

    let angular_velocity_norm = spatial.angular_velocity.norm();
    if angular_velocity_norm > max_angular_velocity {
        spatial.angular_velocity *= max_angular_velocity / angular_velocity_norm;
    }
}

/// Copies the simulated pose onto the render transform, leaving scale alone.
pub fn sync_transform_system(mut query: Query<(&SpatialComponent, &mut Transform)>) {
    for (spatial, mut transform) in query.iter_mut() {
        let pose = spatial.to_transform();
        transform.translation = pose.translation;
        transform.rotation = pose.rotation;
    }
}
