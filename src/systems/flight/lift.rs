use nalgebra::Vector3;

use crate::components::flight::VehicleConfig;
use crate::components::ForceCategory;
use crate::physics::RigidBody;
use crate::utils::rad_to_deg;

/// Level-flight heuristic standing in for angle of attack:
/// `|angle(world_up, body_up) - 90°| / 90°`.
///
/// 1.0 with the body up axis parallel or antiparallel to world up, 0.0 on a
/// knife edge. Velocity direction is ignored on purpose; it is the feel the
/// model is tuned around, not an aerodynamic quantity.
pub fn angle_of_attack_proxy(world_up: &Vector3<f64>, body_up: &Vector3<f64>) -> f64 {
    let angle = rad_to_deg(world_up.angle(body_up));
    ((angle - 90.0).abs() / 90.0).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftForces {
    pub angle_of_attack: f64,
    pub lift: Vector3<f64>,
    pub gravity_compensation: Vector3<f64>,
}

impl LiftForces {
    pub fn apply(&self, body: &mut impl RigidBody) {
        body.add_force(self.lift, ForceCategory::Aerodynamic);
        body.add_force(self.gravity_compensation, ForceCategory::Gravitational);
    }
}

/// Speed-scaled lift along the body up axis plus a gravity term that grows as
/// the body leaves level flight. The two overlap at intermediate attitudes.
pub fn lift_forces(
    body: &impl RigidBody,
    gravity: &Vector3<f64>,
    config: &VehicleConfig,
) -> LiftForces {
    let world_up = -gravity.try_normalize(f64::EPSILON).unwrap_or_else(|| -Vector3::y());
    let body_up = body.up();
    let aoa = angle_of_attack_proxy(&world_up, &body_up);

    let lift = body_up * body.velocity().norm() * config.lift * aoa;
    let gravity_compensation = gravity
        * (config.tuning.gravity_compensation_scale * body.mass() * (1.0 - aoa).powi(2));

    LiftForces {
        angle_of_attack: aoa,
        lift,
        gravity_compensation,
    }
}
