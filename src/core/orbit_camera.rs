//! Main camera orbiting the Earth via `bevy_panorbit_camera`.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

use crate::config::SceneConfig;

/// Marker for the main scene camera
#[derive(Component)]
pub struct MainCamera;

/// Orbit parameters around `focus` for a camera placed at `position`.
///
/// Returns `(radius, yaw, pitch)` using PanOrbit's conventions: yaw measured
/// from +Z towards +X, pitch up from the XZ plane.
pub fn orbit_params_from_position(position: Vec3, focus: Vec3) -> (f32, f32, f32) {
    let offset = position - focus;
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return (0.0, 0.0, 0.0);
    }
    let direction = offset / radius;
    let pitch = direction.y.asin();
    let yaw = direction.x.atan2(direction.z);
    (radius, yaw, pitch)
}

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanOrbitCameraPlugin)
            .add_systems(Startup, spawn_main_camera);
    }
}

pub fn spawn_main_camera(mut commands: Commands, config: Res<SceneConfig>) {
    let camera = &config.camera;
    let (radius, yaw, pitch) = orbit_params_from_position(camera.position, Vec3::ZERO);

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(radius),
        yaw: Some(yaw),
        pitch: Some(pitch),
        orbit_smoothness: camera.smoothness,
        pan_smoothness: camera.smoothness,
        zoom_smoothness: camera.smoothness,
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_deg.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::AcesFitted,
        Transform::from_translation(camera.position).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Main Camera"),
    ));
}
