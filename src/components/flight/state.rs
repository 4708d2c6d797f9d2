use serde::{Deserialize, Serialize};

use super::{ControlSample, VehicleConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashSide {
    Left,
    Right,
}

/// A dash gesture waiting for the next physics step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashRequest {
    /// Controller clock at the second tap [s].
    pub requested_at: f64,
}

/// Single-slot request queue. Posting overwrites, taking empties, so a request
/// that no physics step consumes is simply replaced or dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashSlot(Option<DashRequest>);

impl DashSlot {
    /// Returns the request that was overwritten, if any.
    pub fn post(&mut self, request: DashRequest) -> Option<DashRequest> {
        self.0.replace(request)
    }

    pub fn take(&mut self) -> Option<DashRequest> {
        self.0.take()
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }
}

/// Dash meter measured in seconds of recharge; one dash costs one
/// `dash_recharge_time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashCharge {
    charge: f64,
    unit: f64,
    capacity: f64,
}

impl DashCharge {
    pub fn full(config: &VehicleConfig) -> Self {
        let capacity = config.dash_capacity();
        Self {
            charge: capacity,
            unit: config.dash_recharge_time,
            capacity,
        }
    }

    pub fn with_charge(config: &VehicleConfig, charge: f64) -> Self {
        let mut meter = Self::full(config);
        meter.charge = charge.clamp(0.0, meter.capacity);
        meter
    }

    pub fn value(&self) -> f64 {
        self.charge
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.charge >= self.capacity
    }

    /// Whole dashes available right now.
    pub fn whole_dashes(&self) -> u32 {
        (self.charge / self.unit).floor() as u32
    }

    /// Spends one dash if a full unit is available. Leaves the meter untouched
    /// otherwise.
    pub fn try_consume(&mut self) -> bool {
        if self.charge < self.unit {
            return false;
        }
        self.charge = (self.charge - self.unit).clamp(0.0, self.capacity);
        true
    }

    pub fn recharge(&mut self, dt: f64) {
        if self.charge < self.capacity {
            self.charge = (self.charge + dt).clamp(0.0, self.capacity);
        }
    }
}

/// Mutable per-vehicle flight state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Percent of thrust in use, [0, 100].
    pub throttle: f64,
    pub controls: ControlSample,
    pub high_g: bool,
    pub last_yaw_right_tap: Option<f64>,
    pub last_yaw_left_tap: Option<f64>,
    pub dash_right: DashSlot,
    pub dash_left: DashSlot,
    pub dash_charge: DashCharge,
    /// Angular drag to restore when the sticks leave neutral.
    pub initial_angular_drag: f64,
    /// Sum of every sampled frame delta [s].
    pub clock: f64,
}

impl VehicleState {
    pub fn new(config: &VehicleConfig, initial_angular_drag: f64) -> Self {
        Self {
            throttle: 0.0,
            controls: ControlSample::default(),
            high_g: false,
            last_yaw_right_tap: None,
            last_yaw_left_tap: None,
            dash_right: DashSlot::default(),
            dash_left: DashSlot::default(),
            dash_charge: DashCharge::full(config),
            initial_angular_drag,
            clock: 0.0,
        }
    }

    pub fn slot_mut(&mut self, side: DashSide) -> &mut DashSlot {
        match side {
            DashSide::Right => &mut self.dash_right,
            DashSide::Left => &mut self.dash_left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_dash_config() -> VehicleConfig {
        VehicleConfig {
            max_dashes: 2,
            dash_recharge_time: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_charge_spends_whole_units() {
        let mut charge = DashCharge::full(&two_dash_config());
        assert_eq!(charge.value(), 2.0);

        assert!(charge.try_consume());
        assert_eq!(charge.value(), 1.0);
        assert!(charge.try_consume());
        assert_eq!(charge.value(), 0.0);

        assert!(!charge.try_consume());
        assert_eq!(charge.value(), 0.0);
    }

    #[test]
    fn test_partial_charge_is_rejected_unchanged() {
        let mut charge = DashCharge::with_charge(&two_dash_config(), 0.75);
        assert!(!charge.try_consume());
        assert_eq!(charge.value(), 0.75);
        assert_eq!(charge.whole_dashes(), 0);
    }

    #[test]
    fn test_recharge_stops_at_capacity() {
        let mut charge = DashCharge::with_charge(&two_dash_config(), 1.5);
        charge.recharge(0.4);
        assert_relative_eq!(charge.value(), 1.9);
        charge.recharge(0.4);
        assert_eq!(charge.value(), 2.0);
        assert!(charge.is_full());
        charge.recharge(10.0);
        assert_eq!(charge.value(), 2.0);
    }

    #[test]
    fn test_with_charge_clamps() {
        let config = two_dash_config();
        assert_eq!(DashCharge::with_charge(&config, 9.0).value(), 2.0);
        assert_eq!(DashCharge::with_charge(&config, -1.0).value(), 0.0);
    }

    #[test]
    fn test_slot_overwrites_and_clears() {
        let mut slot = DashSlot::default();
        assert!(slot.post(DashRequest { requested_at: 1.0 }).is_none());
        let replaced = slot.post(DashRequest { requested_at: 2.0 });
        assert_eq!(replaced, Some(DashRequest { requested_at: 1.0 }));

        assert_eq!(slot.take(), Some(DashRequest { requested_at: 2.0 }));
        assert!(!slot.is_pending());
        assert!(slot.take().is_none());
    }
}
