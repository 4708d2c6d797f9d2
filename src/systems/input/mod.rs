mod keyboard;

pub use keyboard::{key_pair_value, keyboard_input_system, smooth_axis, trigger_value};
