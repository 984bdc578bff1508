//! Sun and ambient lighting

use bevy::light::{CascadeShadowConfigBuilder, DirectionalLightShadowMap, GlobalAmbientLight};
use bevy::prelude::*;

use crate::config::SceneConfig;

/// Marker component for the sun directional light
#[derive(Component)]
pub struct SunLight;

/// Spawn the shadow-casting sun and set the ambient fill
pub fn spawn_lighting(mut commands: Commands, config: Res<SceneConfig>) {
    let lighting = &config.lighting;

    // Keeps the night side readable
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: lighting.ambient_brightness,
        ..default()
    });
    commands.insert_resource(DirectionalLightShadowMap {
        size: lighting.shadow_map_size,
    });

    let cascades = CascadeShadowConfigBuilder {
        num_cascades: 1,
        minimum_distance: lighting.shadow_near,
        maximum_distance: lighting.shadow_far,
        first_cascade_far_bound: lighting.shadow_far,
        ..default()
    }
    .build();

    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: lighting.sun_illuminance,
            shadows_enabled: true,
            ..default()
        },
        cascades,
        SunLight,
        // -Z points back at the origin
        Transform::from_translation(lighting.sun_position).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_sun_faces_origin() {
        let mut app = App::new();
        app.insert_resource(SceneConfig::default());
        app.world_mut()
            .run_system_once(spawn_lighting)
            .expect("system runs");

        let world = app.world_mut();
        let mut suns = world.query_filtered::<(&Transform, &DirectionalLight), With<SunLight>>();
        let (transform, light) = suns.single(world).expect("one sun");
        assert!(light.shadows_enabled);

        let to_origin = (-transform.translation).normalize();
        assert!(transform.forward().dot(to_origin) > 0.999);

        assert_eq!(world.resource::<DirectionalLightShadowMap>().size, 512);
        assert_eq!(world.resource::<GlobalAmbientLight>().brightness, 150.0);
    }
}
