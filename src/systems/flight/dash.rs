use bevy::log::debug;
use nalgebra::Vector3;

use crate::components::flight::{DashSide, VehicleConfig, VehicleState};
use crate::components::ForceCategory;
use crate::physics::RigidBody;

/// Side force for a dash: grows with airspeed, floored so it still works when
/// slow and capped so it stays controllable when fast.
pub fn dash_force_magnitude(speed: f64, config: &VehicleConfig) -> f64 {
    let scale = config.max_thrust * config.dash_force;
    let floor = scale / config.tuning.dash_floor_divisor;
    let ceiling = scale / config.tuning.dash_ceiling_divisor;
    (speed * config.dash_force).clamp(floor, ceiling)
}

/// A right dash pushes along `-right`, a left dash along `+right`.
pub fn dash_direction(side: DashSide, right: &Vector3<f64>) -> Vector3<f64> {
    match side {
        DashSide::Right => -*right,
        DashSide::Left => *right,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashOutcome {
    pub right: bool,
    pub left: bool,
}

impl DashOutcome {
    pub fn any(&self) -> bool {
        self.right || self.left
    }

    fn record(&mut self, side: DashSide) {
        match side {
            DashSide::Right => self.right = true,
            DashSide::Left => self.left = true,
        }
    }
}

/// Drains both dash slots, right first. Each request either spends one dash
/// and applies its force this step or is dropped; nothing carries over.
pub fn process_dashes(
    state: &mut VehicleState,
    config: &VehicleConfig,
    body: &mut impl RigidBody,
) -> DashOutcome {
    let mut outcome = DashOutcome::default();

    for side in [DashSide::Right, DashSide::Left] {
        let Some(request) = state.slot_mut(side).take() else {
            continue;
        };
        if !state.dash_charge.try_consume() {
            debug!(
                "Dropped {:?} dash requested at {:.3}s: charge {:.3}",
                side,
                request.requested_at,
                state.dash_charge.value()
            );
            continue;
        }

        let magnitude = dash_force_magnitude(body.velocity().norm(), config);
        let force = dash_direction(side, &body.right()) * magnitude;
        body.add_force(force, ForceCategory::Dash);
        outcome.record(side);
        debug!(
            "{:?} dash: force {:.1}, charge left {:.3}",
            side,
            magnitude,
            state.dash_charge.value()
        );
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::flight::{DashCharge, DashRequest};
    use crate::systems::flight::testing::RecordingBody;
    use approx::assert_relative_eq;

    fn state_with_charge(config: &VehicleConfig, charge: f64) -> VehicleState {
        let mut state = VehicleState::new(config, 1.0);
        state.dash_charge = DashCharge::with_charge(config, charge);
        state
    }

    fn request() -> DashRequest {
        DashRequest { requested_at: 0.0 }
    }

    #[test]
    fn test_force_clamped_between_floor_and_ceiling() {
        let config = VehicleConfig::default();
        // 200 * 100 / 24 and 200 * 100 / 12
        let floor = 20_000.0 / 24.0;
        let ceiling = 20_000.0 / 12.0;

        assert_relative_eq!(dash_force_magnitude(0.0, &config), floor);
        assert_relative_eq!(dash_force_magnitude(10.0, &config), 1000.0);
        assert_relative_eq!(dash_force_magnitude(500.0, &config), ceiling);
    }

    #[test]
    fn test_right_dash_pushes_negative_right() {
        let config = VehicleConfig::default();
        let mut state = state_with_charge(&config, 2.0);
        let mut body = RecordingBody::level(10.0);
        body.velocity = Vector3::new(0.0, 0.0, -10.0);

        state.dash_right.post(request());
        let outcome = process_dashes(&mut state, &config, &mut body);

        assert_eq!(outcome, DashOutcome { right: true, left: false });
        let dash = body.total_force(ForceCategory::Dash);
        assert_relative_eq!(dash.x, -1000.0);
        assert_eq!(state.dash_charge.value(), 1.0);
        assert!(!state.dash_right.is_pending());
    }

    #[test]
    fn test_left_dash_pushes_positive_right() {
        let config = VehicleConfig::default();
        let mut state = state_with_charge(&config, 2.0);
        let mut body = RecordingBody::level(10.0);

        state.dash_left.post(request());
        process_dashes(&mut state, &config, &mut body);

        assert!(body.total_force(ForceCategory::Dash).x > 0.0);
    }

    #[test]
    fn test_charge_sequence_two_then_rejected() {
        let config = VehicleConfig {
            max_dashes: 2,
            dash_recharge_time: 1.0,
            ..Default::default()
        };
        let mut state = state_with_charge(&config, 2.0);
        let mut body = RecordingBody::level(10.0);

        for expected in [1.0, 0.0] {
            state.dash_right.post(request());
            assert!(process_dashes(&mut state, &config, &mut body).right);
            assert_eq!(state.dash_charge.value(), expected);
        }

        body.forces.clear();
        state.dash_right.post(request());
        let outcome = process_dashes(&mut state, &config, &mut body);
        assert!(!outcome.any());
        assert_eq!(state.dash_charge.value(), 0.0);
        assert_eq!(body.total_force(ForceCategory::Dash), Vector3::zeros());
    }

    #[test]
    fn test_undercharged_request_is_dropped_not_queued() {
        let config = VehicleConfig::default();
        let mut state = state_with_charge(&config, 0.5);
        let mut body = RecordingBody::level(10.0);

        state.dash_left.post(request());
        assert!(!process_dashes(&mut state, &config, &mut body).any());
        assert!(!state.dash_left.is_pending());
        assert_eq!(state.dash_charge.value(), 0.5);

        // Enough charge later does not resurrect the old request.
        state.dash_charge = DashCharge::full(&config);
        assert!(!process_dashes(&mut state, &config, &mut body).any());
        assert!(body.forces.is_empty());
    }

    #[test]
    fn test_both_sides_in_one_step_with_one_charge() {
        let config = VehicleConfig::default();
        let mut state = state_with_charge(&config, 1.0);
        let mut body = RecordingBody::level(10.0);

        state.dash_right.post(request());
        state.dash_left.post(request());
        let outcome = process_dashes(&mut state, &config, &mut body);

        assert_eq!(outcome, DashOutcome { right: true, left: false });
        assert!(!state.dash_left.is_pending());
    }
}
