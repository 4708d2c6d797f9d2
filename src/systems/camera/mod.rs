mod follow;

pub use follow::{camera_follow_system, camera_target_system};
