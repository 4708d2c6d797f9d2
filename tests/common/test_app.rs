use std::time::Duration;

use arcade_flyer::{
    components::{
        FlightController, PhysicsComponent, PlayerController, PointOfView, SpatialComponent,
    },
    plugins::*,
    resources::{FlyerConfig, InputFrame},
};
use bevy::{
    hierarchy::HierarchyPlugin, prelude::*, time::TimeUpdateStrategy, transform::TransformPlugin,
};

/// Physics step used by every test app. Exactly representable, so one
/// `app.update()` advances exactly one fixed step.
pub const TEST_TIMESTEP: f64 = 1.0 / 64.0;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: FlyerConfig,
    camera: bool,
    points_of_view: bool,
    hud: bool,
    keyboard: bool,
    lifecycle: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        let mut config = FlyerConfig::default();
        config.physics.timestep = TEST_TIMESTEP;
        Self {
            config,
            camera: false,
            points_of_view: true,
            hud: false,
            keyboard: false,
            lifecycle: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the test timestep whatever `config` says.
    pub fn with_config(mut self, mut config: FlyerConfig) -> Self {
        config.physics.timestep = TEST_TIMESTEP;
        self.config = config;
        self
    }

    pub fn with_camera(mut self) -> Self {
        self.camera = true;
        self
    }

    pub fn without_points_of_view(mut self) -> Self {
        self.points_of_view = false;
        self
    }

    pub fn with_hud(mut self) -> Self {
        self.hud = true;
        self
    }

    /// Polls a hand-driven `ButtonInput<KeyCode>` instead of the input frame.
    pub fn with_keyboard(mut self) -> Self {
        self.keyboard = true;
        self
    }

    pub fn with_lifecycle(mut self) -> Self {
        self.lifecycle = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins((HierarchyPlugin, TransformPlugin))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                TEST_TIMESTEP,
            )))
            .add_plugins(StartupSequencePlugin)
            .add_plugins(PhysicsPlugin::new(self.config.physics.clone()))
            .add_plugins(FlightPlugin::new(self.config.clone()));

        if self.camera {
            app.add_plugins(CameraPlugin::new(self.config.camera.clone()));
            if self.points_of_view {
                app.add_systems(Startup, attach_points_of_view.in_set(StartupStage::BuildScene));
            }
        }
        if self.hud {
            app.add_plugins(HudPlugin);
        }
        if self.keyboard {
            app.init_resource::<ButtonInput<KeyCode>>()
                .add_plugins(ControlsPlugin::default());
        }
        if self.lifecycle {
            app.add_plugins(LifecyclePlugin);
        }

        // Startup plus a zero-length first frame
        app.update();

        TestApp {
            app,
            keyboard: self.keyboard,
        }
    }
}

/// Chase, cockpit and side views, in that order.
pub const POV_OFFSETS: [Vec3; 3] = [
    Vec3::new(0.0, 3.0, 14.0),
    Vec3::new(0.0, 0.6, -1.0),
    Vec3::new(12.0, 2.0, 0.0),
];

/// Local transform of each test point of view; the side view faces the aircraft.
pub fn pov_transform(index: usize) -> Transform {
    let transform = Transform::from_translation(POV_OFFSETS[index]);
    if index == 2 {
        transform.looking_at(Vec3::ZERO, Vec3::Y)
    } else {
        transform
    }
}

fn attach_points_of_view(mut commands: Commands, aircraft: Query<Entity, With<PlayerController>>) {
    for entity in aircraft.iter() {
        commands.entity(entity).with_children(|parent| {
            // Spawned out of order to check the rig sorts them.
            for order in [2u32, 0, 1] {
                parent.spawn((pov_transform(order as usize), PointOfView { order }));
            }
        });
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    keyboard: bool,
}

impl TestApp {
    pub fn run_frame(&mut self) {
        self.app.update();
        if !self.keyboard {
            // Nothing else clears edges when the frame is driven by hand.
            self.input_mut().begin_frame();
        } else {
            self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
        }
    }

    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.run_frame();
        }
    }

    /// Sets up the input frame, then runs one frame.
    pub fn run_frame_with(&mut self, f: impl FnOnce(&mut InputFrame)) {
        f(self.input_mut().into_inner());
        self.run_frame();
    }

    pub fn input_mut(&mut self) -> Mut<InputFrame> {
        self.app.world_mut().resource_mut::<InputFrame>()
    }

    pub fn keyboard_mut(&mut self) -> Mut<ButtonInput<KeyCode>> {
        self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>()
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component + Clone>(&mut self) -> Option<T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok().cloned()
    }

    pub fn count<T: Component>(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).count()
    }

    pub fn controller(&mut self) -> FlightController {
        self.query_single::<FlightController>()
            .expect("no flight controller")
    }

    pub fn spatial(&mut self) -> SpatialComponent {
        self.query_single::<SpatialComponent>()
            .expect("no spatial component")
    }

    pub fn physics(&mut self) -> PhysicsComponent {
        self.query_single::<PhysicsComponent>()
            .expect("no physics component")
    }
}
