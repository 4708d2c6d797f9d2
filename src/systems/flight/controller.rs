use bevy::prelude::*;
use nalgebra::Vector3;

use super::attitude::attitude_torques;
use super::dash::{process_dashes, DashOutcome};
use super::drag::ramp_angular_drag;
use super::input::sample_controls;
use super::lift::lift_forces;
use super::throttle::{step_throttle, thrust_force};
use crate::components::flight::{FlightController, InputSource};
use crate::components::{ForceCategory, PhysicsComponent, PlayerController, SpatialComponent};
use crate::physics::{BodyHandle, RigidBody};
use crate::resources::{InputFrame, PhysicsConfig};

/// What one physics step of the flight model did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub thrust: Vector3<f64>,
    pub torque: Vector3<f64>,
    pub angle_of_attack: f64,
    pub dashes: DashOutcome,
    pub angular_drag: f64,
    pub throttle: f64,
}

impl FlightController {
    /// Frame phase. Advances the controller clock by `dt` and latches input.
    pub fn sample(&mut self, input: &impl InputSource, dt: f64) {
        self.state.clock += dt;
        let now = self.state.clock;
        sample_controls(&mut self.state, &self.config, input, now);
    }

    /// Physics phase. Pushes this step's forces and torques into `body`,
    /// consumes pending dash requests and advances throttle, drag and dash
    /// charge. Must run after [`FlightController::sample`].
    pub fn integrate<B: RigidBody>(
        &mut self,
        body: &mut B,
        gravity: &Vector3<f64>,
        dt: f64,
    ) -> StepReport {
        let config = &self.config;
        let state = &mut self.state;

        let thrust = thrust_force(&body.forward(), state.throttle, config);
        body.add_force(thrust, ForceCategory::Propulsive);

        let torques = attitude_torques(&*body, &state.controls, state.high_g, config);
        torques.apply(body);

        let lift = lift_forces(&*body, gravity, config);
        lift.apply(body);

        let dashes = process_dashes(state, config, body);

        let angular_drag = ramp_angular_drag(
            body.angular_drag(),
            state.initial_angular_drag,
            &state.controls,
            config,
        );
        body.set_angular_drag(angular_drag);

        state.throttle = step_throttle(state.throttle, &state.controls, config);
        state.dash_charge.recharge(dt);

        StepReport {
            thrust,
            torque: torques.total(),
            angle_of_attack: lift.angle_of_attack,
            dashes,
            angular_drag,
            throttle: state.throttle,
        }
    }
}

/// Latches the current input frame into every active player controller.
pub fn flight_sample_system(
    mut query: Query<(&mut FlightController, &PlayerController)>,
    input: Res<InputFrame>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();
    for (mut controller, player) in query.iter_mut() {
        if player.is_active() {
            controller.sample(&*input, dt);
        }
    }
}

/// Runs the flight model for every active controlled body, feeding the host
/// solver.
pub fn flight_integrate_system(
    mut query: Query<(
        &mut FlightController,
        &mut PhysicsComponent,
        &SpatialComponent,
        &PlayerController,
    )>,
    config: Res<PhysicsConfig>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();
    for (mut controller, mut physics, spatial, player) in query.iter_mut() {
        if !player.is_active() {
            continue;
        }
        let mut body = BodyHandle::new(&mut physics, spatial);
        let report = controller.integrate(&mut body, &config.gravity, dt);
        if report.dashes.any() {
            info!(
                "Dash (right: {}, left: {}), {} left",
                report.dashes.right,
                report.dashes.left,
                controller.state.dash_charge.whole_dashes()
            );
        }
        trace!(
            "throttle {:.1}%, aoa {:.2}, angular drag {:.2}",
            report.throttle,
            report.angle_of_attack,
            report.angular_drag
        );
    }
}
