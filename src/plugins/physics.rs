use crate::resources::PhysicsConfig;
use crate::systems::physics::{
    force_calculator_system, physics_integrator_system, sync_transform_system,
};
use bevy::prelude::*;

/// Physics simulation stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PhysicsSet {
    ForceCalculation,
    Integration,
    Sync,
}

#[derive(Default)]
pub struct PhysicsPlugin {
    pub config: PhysicsConfig,
}

impl PhysicsPlugin {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_seconds(self.config.timestep));

        app.configure_sets(
            FixedUpdate,
            (
                PhysicsSet::ForceCalculation,
                PhysicsSet::Integration,
                PhysicsSet::Sync,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                force_calculator_system.in_set(PhysicsSet::ForceCalculation),
                physics_integrator_system.in_set(PhysicsSet::Integration),
                sync_transform_system.in_set(PhysicsSet::Sync),
            ),
        );
    }
}
