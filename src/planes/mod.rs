//! Orbiting planes
//!
//! Each plane is a group entity carrying an [`OrbitingObject`]: the glTF
//! model plus a trail quad. The orbital module moves the group every frame.
//!
//! [`OrbitingObject`]: crate::orbital::OrbitingObject

use bevy::prelude::*;

pub mod components;
pub mod systems;

pub use components::{PlaneModel, PlaneTrail};
pub use systems::spawn_planes;

use crate::assets::AppState;

/// Plugin spawning the planes once assets are loaded
pub struct PlanesPlugin;

impl Plugin for PlanesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), spawn_planes);
    }
}
