use bevy::prelude::*;

/// Marks the aircraft flown by the local player.
///
/// While inactive the flight model neither samples input nor pushes forces;
/// the body coasts under the host solver alone.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerController {
    active: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self { active: true }
    }
}

impl PlayerController {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
