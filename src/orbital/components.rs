//! Components for objects riding an orbital ring

use bevy::prelude::*;

use crate::orbital::ring::OrbitRing;

/// One animated object circling the central body.
///
/// The entity carrying this component is the object's visual group; its
/// children (model, trail) inherit the transform rebuilt every frame.
#[derive(Component, Debug, Clone)]
pub struct OrbitingObject {
    pub ring: OrbitRing,
    /// Accumulated orbital angle in radians, never wrapped
    pub rotation_angle: f64,
}

impl OrbitingObject {
    pub fn new(ring: OrbitRing, rotation_angle: f64) -> Self {
        Self {
            ring,
            rotation_angle,
        }
    }

    /// Accumulate `delta_secs × angular_speed`
    pub fn advance(&mut self, delta_secs: f64, angular_speed: f64) {
        self.rotation_angle += delta_secs * angular_speed;
    }

    pub fn transform(&self) -> Transform {
        self.ring.transform_at(self.rotation_angle)
    }
}
