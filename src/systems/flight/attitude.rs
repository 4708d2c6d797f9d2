use nalgebra::Vector3;

use crate::components::flight::{ControlSample, VehicleConfig};
use crate::physics::RigidBody;

/// Torque scale for a body: heavier airframes get proportionally more torque
/// for the same responsiveness.
pub fn response_modifier(mass: f64, responsiveness: f64) -> f64 {
    (mass / 10.0) * responsiveness
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeTorques {
    pub yaw: Vector3<f64>,
    pub roll: Vector3<f64>,
    pub pitch: Vector3<f64>,
}

impl AttitudeTorques {
    pub fn total(&self) -> Vector3<f64> {
        self.yaw + self.roll + self.pitch
    }

    pub fn apply(&self, body: &mut impl RigidBody) {
        body.add_torque(self.yaw);
        body.add_torque(self.roll);
        body.add_torque(self.pitch);
    }
}

/// Control torques about the body axes. The axes are independent apart from
/// the shared response modifier.
pub fn attitude_torques(
    body: &impl RigidBody,
    controls: &ControlSample,
    high_g: bool,
    config: &VehicleConfig,
) -> AttitudeTorques {
    let modifier = response_modifier(body.mass(), config.responsiveness);

    let yaw = body.up() * controls.yaw * modifier * config.yaw_speed;
    let roll = body.forward() * controls.roll * modifier;

    let pitch_authority = if high_g {
        modifier + config.high_g_response
    } else {
        modifier
    };
    let mut pitch = body.right() * controls.pitch * pitch_authority;
    if controls.pitch < 0.0 {
        pitch *= config.pitch_down_speed;
    }

    AttitudeTorques { yaw, roll, pitch }
}
