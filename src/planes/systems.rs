//! Plane spawning

use bevy::light::NotShadowCaster;
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use crate::assets::AssetBundle;
use crate::config::SceneConfig;
use crate::core::rng::SceneRng;
use crate::orbital::{OrbitRing, OrbitingObject};
use crate::planes::components::{PlaneModel, PlaneTrail};

const TRAIL_SIZE: Vec2 = Vec2::new(1.0, 2.0);
const TRAIL_OFFSET: f32 = 1.1;

/// Trail placement relative to its plane: flipped about X, then pushed along
/// its own up axis so it trails behind the model.
pub fn trail_transform() -> Transform {
    let mut transform = Transform::from_rotation(Quat::from_rotation_x(PI));
    let up = transform.local_y();
    transform.translation += up * TRAIL_OFFSET;
    transform
}

/// The mask image supplies the trail's alpha
pub fn trail_material(mask: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(mask),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.4,
        metallic: 0.0,
        specular_transmission: 1.0,
        ..default()
    }
}

/// Spawn every orbiting plane with freshly sampled ring parameters
pub fn spawn_planes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    bundle: Res<AssetBundle>,
    config: Res<SceneConfig>,
    mut rng: ResMut<SceneRng>,
) {
    let orbit = &config.orbit;
    let trail_mesh = meshes.add(Rectangle::from_size(TRAIL_SIZE));
    let trail_material = materials.add(trail_material(bundle.trail_mask.clone()));

    for i in 0..orbit.plane_count {
        let rotation_angle = rng.random::<f64>() * std::f64::consts::TAU;
        let ring = OrbitRing::sample(&mut **rng, orbit);
        let object = OrbitingObject::new(ring, rotation_angle);

        commands
            .spawn((
                object.transform(),
                Visibility::Visible,
                object,
                Name::new(format!("Plane {}", i + 1)),
            ))
            .with_children(|group| {
                group.spawn((
                    SceneRoot(bundle.plane_model.clone()),
                    Transform::from_scale(Vec3::splat(orbit.model_scale)),
                    PlaneModel,
                ));
                group.spawn((
                    Mesh3d(trail_mesh.clone()),
                    MeshMaterial3d(trail_material.clone()),
                    trail_transform(),
                    NotShadowCaster,
                    PlaneTrail,
                ));
            });
    }

    info!("Spawned {} orbiting planes", orbit.plane_count);
}
