use bevy::prelude::*;
use std::{env, process::ExitCode};

use arcade_flyer::{
    components::{PlayerController, PointOfView, Thruster},
    plugins::{
        CameraPlugin, ControlsPlugin, FlightPlugin, HudPlugin, LifecyclePlugin, PhysicsPlugin,
        StartupSequencePlugin, StartupStage,
    },
    resources::FlyerConfig,
};

fn main() -> ExitCode {
    let config = match env::args().nth(1) {
        Some(path) => match FlyerConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => FlyerConfig::default(),
    };

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Arcade Flyer".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            StartupSequencePlugin,
            PhysicsPlugin::new(config.physics.clone()),
            ControlsPlugin::default(),
            FlightPlugin::new(config.clone()),
            CameraPlugin::new(config.camera.clone()),
            HudPlugin,
            LifecyclePlugin,
        ))
        .add_systems(Startup, setup_scene.in_set(StartupStage::BuildScene))
        .run();

    match exit {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(_) => ExitCode::FAILURE,
    }
}

/// Ground, light and the aircraft's visuals, points of view and thrusters.
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    aircraft: Query<Entity, With<PlayerController>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(4000.0, 4000.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(100.0, 300.0, 100.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let Ok(aircraft) = aircraft.get_single() else {
        warn!("No aircraft to dress");
        return;
    };

    let hull = meshes.add(Cuboid::new(1.0, 0.6, 4.0));
    let wing = meshes.add(Cuboid::new(6.0, 0.1, 1.2));
    let exhaust = meshes.add(Sphere::new(0.35));
    let body_material = materials.add(Color::srgb(0.8, 0.8, 0.85));
    let exhaust_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.5, 0.1),
        emissive: LinearRgba::rgb(4.0, 1.5, 0.2),
        ..default()
    });

    commands
        .entity(aircraft)
        .insert(Visibility::default())
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(hull),
                MeshMaterial3d(body_material.clone()),
            ));
            parent.spawn((
                Mesh3d(wing),
                MeshMaterial3d(body_material),
                Transform::from_xyz(0.0, 0.0, 0.3),
            ));
            for x in [-0.4, 0.4] {
                parent.spawn((
                    Mesh3d(exhaust.clone()),
                    MeshMaterial3d(exhaust_material.clone()),
                    Transform::from_xyz(x, 0.0, 2.1),
                    Thruster,
                ));
            }

            // Chase, cockpit and side views; the tail is at +Z.
            parent.spawn((
                Transform::from_xyz(0.0, 3.0, 14.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
                PointOfView { order: 0 },
            ));
            parent.spawn((
                Transform::from_xyz(0.0, 0.6, -1.0),
                PointOfView { order: 1 },
            ));
            parent.spawn((
                Transform::from_xyz(12.0, 2.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y),
                PointOfView { order: 2 },
            ));
        });
}
