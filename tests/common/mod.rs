#![allow(dead_code)]

mod assertions;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{
    assert_controller_valid, assert_physics_valid, assert_spatial_valid, assert_vec3_eq,
};

pub use helpers::*;

pub use test_app::{pov_transform, TestApp, TestAppBuilder, POV_OFFSETS, TEST_TIMESTEP};
