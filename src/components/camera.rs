use bevy::prelude::*;

use crate::utils::{move_towards, FlyerError};

/// Marks an entity whose global transform is a camera vantage point. Rigs
/// visit points of view in ascending `order`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointOfView {
    pub order: u32,
}

/// Which point of view the camera is heading for and where it currently is.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFollowState {
    index: usize,
    pov_count: usize,
    pub target_position: Vec3,
    pub target_rotation: Quat,
}

impl CameraFollowState {
    pub fn new(pov_count: usize) -> Result<Self, FlyerError> {
        if pov_count == 0 {
            return Err(FlyerError::NoPointsOfView);
        }
        Ok(Self {
            index: 0,
            pov_count,
            target_position: Vec3::ZERO,
            target_rotation: Quat::IDENTITY,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to the next point of view, wrapping past the last one.
    pub fn cycle(&mut self) {
        self.index += 1;
        if self.index >= self.pov_count {
            self.index = 0;
        }
    }

    pub fn set_target(&mut self, position: Vec3, rotation: Quat) {
        self.target_position = position;
        self.target_rotation = rotation;
    }

    /// Moves `transform` toward the target by at most `speed * dt` and snaps
    /// its rotation.
    pub fn step(&self, transform: &mut Transform, speed: f32, dt: f32) {
        transform.translation = move_towards(transform.translation, self.target_position, speed * dt);
        transform.rotation = self.target_rotation;
    }
}

#[derive(Component, Debug, Clone)]
pub struct CameraRig {
    points_of_view: Vec<Entity>,
    pub speed: f64,
    pub follow: CameraFollowState,
}

impl CameraRig {
    pub fn new(points_of_view: Vec<Entity>, speed: f64) -> Result<Self, FlyerError> {
        let follow = CameraFollowState::new(points_of_view.len())?;
        Ok(Self {
            points_of_view,
            speed,
            follow,
        })
    }

    pub fn points_of_view(&self) -> &[Entity] {
        &self.points_of_view
    }

    pub fn current_pov(&self) -> Result<Entity, FlyerError> {
        let index = self.follow.index();
        self.points_of_view
            .get(index)
            .copied()
            .ok_or(FlyerError::PointOfViewOutOfRange {
                index,
                count: self.points_of_view.len(),
            })
    }
}
