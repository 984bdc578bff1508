//! Visualization module
//!
//! Static scene dressing: the Earth group, lighting and the starfield.

use bevy::prelude::*;

pub mod earth;
pub mod lighting;
pub mod starfield;

pub use earth::{Earth, spawn_earth, spin_earth};
pub use lighting::{SunLight, spawn_lighting};
pub use starfield::{Starfield, spawn_starfield};

use crate::assets::AppState;

/// Plugin for scene dressing
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_lighting, spawn_starfield))
            .add_systems(OnEnter(AppState::Running), spawn_earth)
            .add_systems(Update, spin_earth.run_if(in_state(AppState::Running)));
    }
}
