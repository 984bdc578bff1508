//! Orbital placement module
//!
//! Objects ride tilted rings around the central body. Ring parameters are
//! sampled once; each frame only the accumulated angle advances and the
//! transform is rebuilt from scratch.

use bevy::prelude::*;

pub mod components;
pub mod ring;
pub mod systems;

pub use components::OrbitingObject;
pub use ring::OrbitRing;
pub use systems::{advance_orbits, apply_orbit_transforms};

use crate::assets::AppState;

/// Plugin for the per-frame orbital update
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (advance_orbits, apply_orbit_transforms)
                .chain()
                .run_if(in_state(AppState::Running)),
        );
    }
}
