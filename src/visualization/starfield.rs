//! Random point starfield surrounding the scene

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::Rng;

use crate::config::SceneConfig;
use crate::core::rng::SceneRng;

/// Marker for the starfield entity
#[derive(Component)]
pub struct Starfield;

/// Uniform positions inside a cube of the given half-extent
pub fn generate_star_positions<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    half_extent: f32,
) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                (rng.random::<f32>() - 0.5) * 2.0 * half_extent,
                (rng.random::<f32>() - 0.5) * 2.0 * half_extent,
                (rng.random::<f32>() - 0.5) * 2.0 * half_extent,
            ]
        })
        .collect()
}

pub fn starfield_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
    mut rng: ResMut<SceneRng>,
) {
    let stars = &config.starfield;
    let positions = generate_star_positions(&mut **rng, stars.count, stars.half_extent);

    commands.spawn((
        Mesh3d(meshes.add(starfield_mesh(positions))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        Starfield,
        Name::new("Starfield"),
    ));

    info!("Spawned {} background stars", stars.count);
}
