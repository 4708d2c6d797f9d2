use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{FlightController, PhysicsComponent, PlayerController, SpatialComponent};
use crate::plugins::{PhysicsSet, StartupStage};
use crate::resources::{BodyConfig, FlyerConfig, InputFrame};
use crate::systems::{flight_integrate_system, flight_sample_system};
use crate::utils::FlyerError;

/// Ordering of the flight model against input polling and the host solver.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    /// `Update`: poll devices into the input frame.
    Input,
    /// `Update`: latch the frame into the controllers.
    Sample,
    /// `FixedUpdate`: push forces and torques, before the solver sums them.
    Forces,
}

/// Spawns the player aircraft and runs its flight model.
pub struct FlightPlugin {
    config: FlyerConfig,
}

impl FlightPlugin {
    pub fn new(config: FlyerConfig) -> Self {
        FlightPlugin { config }
    }

    fn setup_aircraft(mut commands: Commands, config: FlyerConfig) {
        match Self::spawn_aircraft(&mut commands, &config) {
            Ok(entity) => info!(
                "Spawned aircraft {entity:?} at {:?}, {:.0} m/s",
                config.body.start_position, config.body.start_speed
            ),
            Err(e) => error!("Not spawning aircraft: {e}"),
        }
    }

    fn spawn_aircraft(commands: &mut Commands, config: &FlyerConfig) -> Result<Entity, FlyerError> {
        let body = &config.body;
        let controller = FlightController::new(config.vehicle.clone(), body.angular_drag)?;
        let spatial = initial_spatial(body);
        let entity = commands
            .spawn((
                controller,
                PhysicsComponent::new(body.mass, body.inertia_matrix())
                    .with_drag(body.linear_drag, body.angular_drag),
                spatial,
                spatial.to_transform(),
                PlayerController::default(),
                Name::new("Aircraft"),
            ))
            .id();
        Ok(entity)
    }
}

fn initial_spatial(body: &BodyConfig) -> SpatialComponent {
    let attitude = UnitQuaternion::identity();
    let nose = -(attitude * Vector3::z());
    SpatialComponent::new(
        body.start_position,
        nose * body.start_speed,
        attitude,
        Vector3::zeros(),
    )
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        app.init_resource::<InputFrame>()
            .configure_sets(Update, (FlightSet::Input, FlightSet::Sample).chain())
            .configure_sets(
                FixedUpdate,
                FlightSet::Forces.before(PhysicsSet::ForceCalculation),
            )
            .add_systems(
                Startup,
                (move |commands: Commands| Self::setup_aircraft(commands, config.clone()))
                    .in_set(StartupStage::BuildAircraft),
            )
            .add_systems(Update, flight_sample_system.in_set(FlightSet::Sample))
            .add_systems(FixedUpdate, flight_integrate_system.in_set(FlightSet::Forces));
    }
}
