//! Per-frame orbital update systems

use bevy::prelude::*;

use crate::config::SceneConfig;
use crate::orbital::components::OrbitingObject;

/// Advance every orbiting object's accumulated angle by this frame's delta
pub fn advance_orbits(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut query: Query<&mut OrbitingObject>,
) {
    let dt = time.delta_secs_f64();
    for mut object in &mut query {
        object.advance(dt, config.orbit.angular_speed);
    }
}

/// Rebuild each object's transform from identity for its current angle
pub fn apply_orbit_transforms(mut query: Query<(&OrbitingObject, &mut Transform)>) {
    for (object, mut transform) in &mut query {
        *transform = object.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::ring::OrbitRing;
    use approx::assert_relative_eq;
    use std::time::Duration;

    fn create_orbit_app() -> App {
        let mut app = App::new();
        app.insert_resource(SceneConfig::default());
        app.init_resource::<Time>();
        app.add_systems(Update, (advance_orbits, apply_orbit_transforms).chain());
        app
    }

    fn step(app: &mut App, millis: u64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(millis));
        app.update();
    }

    #[test]
    fn test_systems_advance_and_place() {
        let mut app = create_orbit_app();
        let ring = OrbitRing::untilted_axis(0.5, 10.5);
        let entity = app
            .world_mut()
            .spawn((OrbitingObject::new(ring, 0.0), Transform::IDENTITY))
            .id();

        for _ in 0..4 {
            step(&mut app, 500);
        }

        let object = app.world().get::<OrbitingObject>(entity).unwrap();
        // 2 s at 0.25 rad/s
        assert_relative_eq!(object.rotation_angle, 0.5, epsilon = 1e-9);

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert!(
            transform
                .translation
                .abs_diff_eq(ring.closed_form(0.5).translation, 1e-4)
        );
    }

    #[test]
    fn test_stale_transform_is_discarded() {
        let mut app = create_orbit_app();
        let ring = OrbitRing::untilted_axis(1.0, 11.0);
        let entity = app
            .world_mut()
            .spawn((
                OrbitingObject::new(ring, 1.0),
                Transform::from_xyz(100.0, -3.0, 7.0).with_scale(Vec3::splat(4.0)),
            ))
            .id();

        step(&mut app, 0);

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(transform.scale, Vec3::ONE);
        assert!(
            transform
                .translation
                .abs_diff_eq(ring.closed_form(1.0).translation, 1e-4)
        );
    }

    #[test]
    fn test_objects_advance_independently_of_parameters() {
        let mut app = create_orbit_app();
        let a = app
            .world_mut()
            .spawn((
                OrbitingObject::new(OrbitRing::untilted_axis(0.3, 10.5), 0.0),
                Transform::IDENTITY,
            ))
            .id();
        let b = app
            .world_mut()
            .spawn((
                OrbitingObject::new(OrbitRing::untilted_axis(1.2, 11.4), 3.0),
                Transform::IDENTITY,
            ))
            .id();

        step(&mut app, 1000);

        let a = app.world().get::<OrbitingObject>(a).unwrap();
        let b = app.world().get::<OrbitingObject>(b).unwrap();
        assert_relative_eq!(a.rotation_angle, 0.25, epsilon = 1e-9);
        assert_relative_eq!(b.rotation_angle, 3.25, epsilon = 1e-9);
    }
}
