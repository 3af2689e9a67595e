use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;

use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::core::window_config::create_window_config;
use crate::engine::scene::ScenePlugin;
use crate::tools::InteractionPlugin;
use crate::ui::DebugPanelPlugin;

/// Initial camera placement, matching the demo framing of the scene
const CAMERA_EYE: Vec3 = Vec3::new(5.0, 5.0, 8.0);
const CAMERA_FOCUS: Vec3 = Vec3::ZERO;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(WireframePlugin::default())
        .insert_resource(WireframeConfig {
            global: false,
            default_color: Color::WHITE,
        })
        .add_plugins(ScenePlugin)
        .add_plugins(InteractionPlugin)
        .add_plugins(DebugPanelPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, camera_controller);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    DefaultPlugins.set(window_config)
}

fn setup(mut commands: Commands) {
    spawn_viewport_camera(&mut commands);
}

fn spawn_viewport_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
            ..default()
        }),
        Transform::from_translation(CAMERA_EYE).looking_at(CAMERA_FOCUS, Vec3::Y),
    ));
    commands.insert_resource(OrbitCamera::from_eye(CAMERA_EYE, CAMERA_FOCUS));
}
