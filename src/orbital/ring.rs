//! Tilted orbital rings and the placement math for objects riding them

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::config::OrbitConfig;

/// Fixed, creation-time parameters of one orbital ring.
///
/// Never mutated after sampling; only the accumulated angle changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRing {
    /// Random axis orienting the ring's plane
    pub axis: Dir3,
    /// Rotation about `axis`, radians
    pub axis_angle: f32,
    /// Extra inclination about the local depth axis, radians
    pub tilt: f32,
    /// Distance from the central body's center
    pub radius_offset: f32,
}

impl OrbitRing {
    /// Ring lying in the reference orientation (no random axis rotation)
    #[cfg(test)]
    pub fn untilted_axis(tilt: f32, radius_offset: f32) -> Self {
        Self {
            axis: Dir3::Y,
            axis_angle: 0.0,
            tilt,
            radius_offset,
        }
    }

    /// Sample a ring from the configured ranges
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, config: &OrbitConfig) -> Self {
        let tilt = config.tilt_base + rng.random::<f32>() * config.tilt_span;
        let radius_offset =
            config.radius_offset_base + rng.random::<f32>() * config.radius_offset_span;
        let axis = random_axis(rng);
        let axis_angle = rng.random::<f32>() * TAU;
        Self {
            axis,
            axis_angle,
            tilt,
            radius_offset,
        }
    }

    /// Build the world transform step by step from identity.
    ///
    /// Composition order: axis tilt, orbital yaw, depth-axis tilt, push out
    /// along local up, then a quarter turn about local X so the nose follows
    /// the direction of travel.
    pub fn transform_at(&self, rotation_angle: f64) -> Transform {
        let mut transform = Transform::IDENTITY;
        transform.rotate_local_axis(self.axis, self.axis_angle);
        transform.rotate_local_y(orbit_angle(rotation_angle));
        transform.rotate_local_z(self.tilt);
        let up = transform.local_y();
        transform.translation += up * self.radius_offset;
        transform.rotate_local_x(FRAC_PI_2);
        transform
    }

    /// One-shot equivalent of [`Self::transform_at`]
    #[cfg(test)]
    pub fn closed_form(&self, rotation_angle: f64) -> Transform {
        let ring = Quat::from_axis_angle(self.axis.into(), self.axis_angle)
            * Quat::from_rotation_y(orbit_angle(rotation_angle))
            * Quat::from_rotation_z(self.tilt);
        Transform {
            translation: ring * (Vec3::Y * self.radius_offset),
            rotation: ring * Quat::from_rotation_x(FRAC_PI_2),
            scale: Vec3::ONE,
        }
    }
}

/// Reduce an accumulated angle to [0, 2π) in f64 before narrowing to f32
pub fn orbit_angle(rotation_angle: f64) -> f32 {
    rotation_angle.rem_euclid(std::f64::consts::TAU) as f32
}

/// Uniform components on [-1, 1), normalized. Degenerate draws are retried.
pub fn random_axis<R: Rng + ?Sized>(rng: &mut R) -> Dir3 {
    loop {
        let v = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if let Ok(axis) = Dir3::new(v) {
            return axis;
        }
    }
}
