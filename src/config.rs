//! Scene configuration
//!
//! Every tunable of the scene lives in [`SceneConfig`]. Defaults reproduce the
//! stock scene; a JSON file in the platform config directory can override any
//! subset of keys.

use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::rng::SceneRng;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "EARTHFLIGHTS_CONFIG";

const CONFIG_FILE_NAME: &str = "scene.json";

/// Asset paths, relative to Bevy's `assets/` directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub earth_map: String,
    pub earth_roughness: String,
    pub earth_bump: String,
    pub decal: String,
    pub trail_mask: String,
    pub plane_model: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            earth_map: "earthmap.jpg".to_string(),
            earth_roughness: "earthspec.jpg".to_string(),
            earth_bump: "earthbump.jpg".to_string(),
            decal: "surprise.png".to_string(),
            trail_mask: "mask.png".to_string(),
            plane_model: "plane/scene.glb".to_string(),
        }
    }
}

/// Orbiting plane parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub plane_count: usize,
    /// Orbital angular speed in radians per second
    pub angular_speed: f64,
    pub radius_offset_base: f32,
    pub radius_offset_span: f32,
    pub tilt_base: f32,
    pub tilt_span: f32,
    pub model_scale: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            plane_count: 10,
            angular_speed: 0.25,
            radius_offset_base: 10.5,
            radius_offset_span: 1.0,
            tilt_base: 0.2,
            tilt_span: std::f32::consts::PI * 0.45,
            model_scale: 0.001,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarthConfig {
    pub radius: f32,
    pub decal_radius: f32,
    pub segments: u32,
    /// Spin about +Y in radians per second
    pub spin_rate: f32,
    pub parallax_depth_scale: f32,
    pub clearcoat: f32,
}

impl Default for EarthConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            decal_radius: 9.9,
            segments: 70,
            // 0.0005 rad per frame at 60 Hz
            spin_rate: 0.03,
            parallax_depth_scale: 0.05,
            clearcoat: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Stars are placed uniformly in a cube of this half-extent
    pub half_extent: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            half_extent: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Applied to orbit, pan and zoom
    pub smoothness: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 15.0, 50.0),
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            smoothness: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub sun_position: Vec3,
    pub sun_illuminance: f32,
    pub shadow_map_size: usize,
    pub shadow_near: f32,
    pub shadow_far: f32,
    pub ambient_brightness: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            sun_position: Vec3::new(10.0, 20.0, 10.0),
            sun_illuminance: 8_000.0,
            shadow_map_size: 512,
            shadow_near: 0.5,
            shadow_far: 100.0,
            ambient_brightness: 150.0,
        }
    }
}

/// Top-level scene configuration resource
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    pub assets: AssetPaths,
    pub orbit: OrbitConfig,
    pub earth: EarthConfig,
    pub starfield: StarfieldConfig,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
}

impl SceneConfig {
    /// Parse a (possibly partial) JSON document
    pub fn from_json_str(contents: &str) -> Result<Self, anyhow::Error> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Read a config file from disk
    ///
    /// Returns Ok(None) if the file doesn't exist.
    pub fn read_file(path: &Path) -> Result<Option<Self>, anyhow::Error> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents).map(Some)
    }

    /// Resolve the config path: the env override first, then the platform config dir
    ///
    /// - macOS: ~/Library/Application Support/earthflights/scene.json
    /// - Linux: ~/.config/earthflights/scene.json
    /// - Windows: %APPDATA%\earthflights\config\scene.json
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "earthflights")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the config, falling back to defaults on any problem
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            warn!("Could not resolve config directory, using default scene config");
            return Self::default();
        };

        match Self::read_file(&path) {
            Ok(Some(config)) => {
                info!("Loaded scene config from {}", path.display());
                config
            }
            Ok(None) => {
                info!("No scene config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                warn!(
                    "Failed to load scene config from {}: {}; using defaults",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }
}

/// Loads [`SceneConfig`] and seeds the [`SceneRng`] from it.
///
/// Added after `DefaultPlugins` so config logging goes through the log plugin.
pub struct SceneConfigPlugin;

impl Plugin for SceneConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = SceneConfig::load_or_default();
        match config.seed {
            Some(seed) => info!("Scene seed: {}", seed),
            None => info!("Scene seed: from entropy"),
        }
        app.insert_resource(SceneRng::from_seed_option(config.seed))
            .insert_resource(config);
    }
}
