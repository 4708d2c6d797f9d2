//! In-memory collaborators for unit tests.

use nalgebra::{UnitQuaternion, Vector3};

use crate::components::flight::{ControlAxis, ControlButton, InputSource};
use crate::components::ForceCategory;
use crate::physics::RigidBody;
use crate::utils::IDLE_AXIS_SENTINEL;

pub struct RecordingBody {
    pub mass: f64,
    pub velocity: Vector3<f64>,
    pub attitude: UnitQuaternion<f64>,
    pub angular_drag: f64,
    pub forces: Vec<(Vector3<f64>, ForceCategory)>,
    pub torques: Vec<Vector3<f64>>,
}

impl RecordingBody {
    pub fn level(mass: f64) -> Self {
        Self::with_attitude(mass, UnitQuaternion::identity())
    }

    pub fn with_attitude(mass: f64, attitude: UnitQuaternion<f64>) -> Self {
        Self {
            mass,
            velocity: Vector3::zeros(),
            attitude,
            angular_drag: 1.0,
            forces: Vec::new(),
            torques: Vec::new(),
        }
    }

    pub fn total_force(&self, category: ForceCategory) -> Vector3<f64> {
        self.forces
            .iter()
            .filter(|(_, c)| *c == category)
            .fold(Vector3::zeros(), |acc, (f, _)| acc + f)
    }

    pub fn total_torque(&self) -> Vector3<f64> {
        self.torques.iter().fold(Vector3::zeros(), |acc, t| acc + t)
    }
}

impl RigidBody for RecordingBody {
    fn mass(&self) -> f64 {
        self.mass
    }
    fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }
    fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }
    fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }
    fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }
    fn angular_drag(&self) -> f64 {
        self.angular_drag
    }
    fn set_angular_drag(&mut self, drag: f64) {
        self.angular_drag = drag;
    }
    fn add_force(&mut self, force: Vector3<f64>, category: ForceCategory) {
        self.forces.push((force, category));
    }
    fn add_torque(&mut self, torque: Vector3<f64>) {
        self.torques.push(torque);
    }
}

/// One frame of canned input.
#[derive(Clone)]
pub struct ScriptedInput {
    axes: [f64; 5],
    pressed: [bool; 3],
    just_pressed: [bool; 3],
}

impl Default for ScriptedInput {
    fn default() -> Self {
        let mut axes = [0.0; 5];
        axes[ControlAxis::ThrottleUp.index()] = IDLE_AXIS_SENTINEL;
        axes[ControlAxis::ThrottleDown.index()] = IDLE_AXIS_SENTINEL;
        Self {
            axes,
            pressed: [false; 3],
            just_pressed: [false; 3],
        }
    }
}

impl ScriptedInput {
    pub fn with_axis(mut self, axis: ControlAxis, value: f64) -> Self {
        self.axes[axis.index()] = value;
        self
    }

    pub fn with_just_pressed(mut self, button: ControlButton) -> Self {
        self.pressed[button.index()] = true;
        self.just_pressed[button.index()] = true;
        self
    }
}

impl InputSource for ScriptedInput {
    fn axis(&self, axis: ControlAxis) -> f64 {
        self.axes[axis.index()]
    }
    fn pressed(&self, button: ControlButton) -> bool {
        self.pressed[button.index()]
    }
    fn just_pressed(&self, button: ControlButton) -> bool {
        self.just_pressed[button.index()]
    }
}
