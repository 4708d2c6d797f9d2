use approx::assert_relative_eq;
use arcade_flyer::components::{FlightController, PhysicsComponent, SpatialComponent};
use bevy::math::Vec3;

/// Assert that a spatial component's state is valid
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        spatial.position
    );
    assert!(
        spatial.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        spatial.velocity
    );
    assert!(
        spatial.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite: {:?}",
        spatial.angular_velocity
    );
    assert_relative_eq!(spatial.attitude.as_ref().norm(), 1.0, epsilon = 1e-9);
}

/// Assert that a physics component's state is valid
#[track_caller]
pub fn assert_physics_valid(physics: &PhysicsComponent) {
    assert!(physics.mass > 0.0, "Mass must be positive");
    assert!(physics.mass.is_finite(), "Mass must be finite");
    assert!(
        physics.inertia_inv.iter().all(|x| x.is_finite()),
        "Inverse inertia matrix contains non-finite values"
    );
    assert!(
        (0.0..=100.0).contains(&physics.angular_drag),
        "Angular drag {} outside [0, 100]",
        physics.angular_drag
    );
}

/// Assert the controller's clamped quantities are in range
#[track_caller]
pub fn assert_controller_valid(controller: &FlightController) {
    let state = &controller.state;
    assert!(
        (0.0..=100.0).contains(&state.throttle),
        "Throttle {} outside [0, 100]",
        state.throttle
    );
    let charge = state.dash_charge.value();
    assert!(
        (0.0..=state.dash_charge.capacity()).contains(&charge),
        "Dash charge {} outside [0, {}]",
        charge,
        state.dash_charge.capacity()
    );
}

/// Assert that two render-space points are approximately equal
#[track_caller]
pub fn assert_vec3_eq(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        actual.distance(expected) <= epsilon,
        "{actual:?} is more than {epsilon} from {expected:?}"
    );
}
