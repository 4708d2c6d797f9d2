pub const GRAVITY: f64 = 9.80665; // m/s^2

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0; // Fixed physics step

// Control surface ranges
pub const MIN_THROTTLE: f64 = 0.0; // %
pub const MAX_THROTTLE: f64 = 100.0; // %
pub const MIN_ANGULAR_DRAG: f64 = 0.0;
pub const MAX_ANGULAR_DRAG: f64 = 100.0;

/// Both throttle axes read this value when no analog device is driving them.
pub const IDLE_AXIS_SENTINEL: f64 = -1.0;

// Empirically tuned flight-feel constants. Treat as opaque.
pub const GRAVITY_COMPENSATION_SCALE: f64 = 5.0;
pub const DASH_FLOOR_DIVISOR: f64 = 24.0;
pub const DASH_CEILING_DIVISOR: f64 = 12.0;
pub const HIGH_G_THRESHOLD: f64 = 0.5;
pub const LOW_INPUT_THRESHOLD: f64 = 0.5;

// Display
pub const KMH_PER_MS: f64 = 3.6;
