//! Plane entity markers

use bevy::prelude::*;

/// The glTF model child of an orbiting plane group
#[derive(Component)]
pub struct PlaneModel;

/// The translucent trail quad behind each plane
#[derive(Component)]
pub struct PlaneTrail;
