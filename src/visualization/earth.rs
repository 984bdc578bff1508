//! Central body: textured Earth sphere, back-facing decal sphere and marker box

use bevy::prelude::*;
use bevy::render::render_resource::Face;

use crate::assets::AssetBundle;
use crate::config::SceneConfig;
use crate::orbital::ring::orbit_angle;

const MARKER_COLOR: [u8; 3] = [0x5C, 0x56, 0xDF];
const MARKER_POSITION: Vec3 = Vec3::new(7.125, 7.125, 0.125);
const MARKER_ROLL_RAD: f32 = 40.0;

/// Earth group entity with its accumulated spin, radians
#[derive(Component, Debug, Default)]
pub struct Earth {
    pub spin_angle: f64,
}

/// UV sphere with tangents, needed for the parallax depth map
pub fn earth_sphere_mesh(radius: f32, segments: u32) -> Result<Mesh> {
    let mesh = Sphere::new(radius)
        .mesh()
        .uv(segments, segments)
        .with_generated_tangents()?;
    Ok(mesh)
}

/// Spawn the Earth group once assets are available
pub fn spawn_earth(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    bundle: Res<AssetBundle>,
    config: Res<SceneConfig>,
) -> Result {
    let earth = &config.earth;

    let surface_mesh = meshes.add(earth_sphere_mesh(earth.radius, earth.segments)?);
    let decal_mesh = meshes.add(earth_sphere_mesh(earth.decal_radius, earth.segments)?);

    // Spec map drives roughness through the green channel; metallic stays 0
    // so its blue channel has no effect.
    let surface = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(bundle.earth_map.clone()),
        metallic_roughness_texture: Some(bundle.earth_roughness.clone()),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        depth_map: Some(bundle.earth_bump.clone()),
        parallax_depth_scale: earth.parallax_depth_scale,
        clearcoat: earth.clearcoat,
        ..default()
    });

    // Only the inside of the decal sphere is drawn, so it shows through
    // wherever the camera dips below the surface.
    let decal = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(bundle.decal.clone()),
        metallic_roughness_texture: Some(bundle.earth_roughness.clone()),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        depth_map: Some(bundle.earth_bump.clone()),
        parallax_depth_scale: earth.parallax_depth_scale,
        clearcoat: earth.clearcoat,
        cull_mode: Some(Face::Front),
        double_sided: true,
        ..default()
    });

    let marker = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(MARKER_COLOR[0], MARKER_COLOR[1], MARKER_COLOR[2]),
        ..default()
    });

    commands
        .spawn((
            Transform::IDENTITY,
            Visibility::Visible,
            Earth::default(),
            Name::new("Earth"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(surface_mesh),
                MeshMaterial3d(surface),
                Name::new("Earth Surface"),
            ));
            parent.spawn((
                Mesh3d(decal_mesh),
                MeshMaterial3d(decal),
                Name::new("Earth Decal"),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.125, 0.25, 0.125))),
                MeshMaterial3d(marker),
                Transform::from_translation(MARKER_POSITION)
                    .with_rotation(Quat::from_euler(EulerRot::XYZ, 0.0, 0.0, MARKER_ROLL_RAD)),
                Name::new("Earth Marker"),
            ));
        });

    info!("Spawned Earth (radius {})", earth.radius);
    Ok(())
}

/// Spin the Earth group about +Y at the configured rate.
///
/// The rotation is rebuilt from the accumulated angle every frame.
pub fn spin_earth(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut query: Query<(&mut Earth, &mut Transform)>,
) {
    let delta = config.earth.spin_rate as f64 * time.delta_secs_f64();
    for (mut earth, mut transform) in &mut query {
        earth.spin_angle += delta;
        transform.rotation = Quat::from_rotation_y(orbit_angle(earth.spin_angle));
    }
}
