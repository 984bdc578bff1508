// Rotating Earth circled by aircraft on tilted rings, set against a starfield.

use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod assets;
mod config;
mod core;
mod orbital;
mod planes;
mod visualization;

use assets::SceneAssetsPlugin;
use config::SceneConfigPlugin;
use crate::core::orbit_camera::OrbitCameraPlugin;
use orbital::OrbitalPlugin;
use planes::PlanesPlugin;
use visualization::VisualizationPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Earth Flights".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Config and RNG must exist before any Startup system samples the scene
    app.add_plugins(SceneConfigPlugin);
    app.add_plugins(SceneAssetsPlugin);
    app.add_plugins(OrbitCameraPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(PlanesPlugin);
    app.add_plugins(OrbitalPlugin);

    app.run();
}
