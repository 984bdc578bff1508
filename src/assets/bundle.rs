//! Asset handles and load-state resolution

use bevy::asset::{RecursiveDependencyLoadState, UntypedAssetId};
use bevy::gltf::GltfAssetLabel;
use bevy::image::ImageLoaderSettings;
use bevy::prelude::*;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::config::AssetPaths;

/// Every asset the scene needs before it can be built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    EarthMap,
    EarthRoughness,
    EarthBump,
    Decal,
    TrailMask,
    PlaneModel,
}

impl AssetSlot {
    pub const ALL: [AssetSlot; 6] = [
        AssetSlot::EarthMap,
        AssetSlot::EarthRoughness,
        AssetSlot::EarthBump,
        AssetSlot::Decal,
        AssetSlot::TrailMask,
        AssetSlot::PlaneModel,
    ];

    pub fn path<'a>(&self, paths: &'a AssetPaths) -> &'a str {
        match self {
            AssetSlot::EarthMap => &paths.earth_map,
            AssetSlot::EarthRoughness => &paths.earth_roughness,
            AssetSlot::EarthBump => &paths.earth_bump,
            AssetSlot::Decal => &paths.decal,
            AssetSlot::TrailMask => &paths.trail_mask,
            AssetSlot::PlaneModel => &paths.plane_model,
        }
    }
}

impl fmt::Display for AssetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetSlot::EarthMap => "earth map",
            AssetSlot::EarthRoughness => "earth roughness",
            AssetSlot::EarthBump => "earth bump",
            AssetSlot::Decal => "decal",
            AssetSlot::TrailMask => "trail mask",
            AssetSlot::PlaneModel => "plane model",
        };
        f.write_str(name)
    }
}

/// Load progress of a single slot
#[derive(Debug, Clone, PartialEq)]
pub enum SlotStatus {
    Pending,
    Ready,
    Failed(String),
}

/// Latest load status per slot, refreshed from the asset server each frame
#[derive(Resource, Debug, Default)]
pub struct SlotStatuses(pub HashMap<AssetSlot, SlotStatus>);

impl SlotStatuses {
    /// Slots never reported are still pending
    pub fn get(&self, slot: AssetSlot) -> SlotStatus {
        self.0.get(&slot).cloned().unwrap_or(SlotStatus::Pending)
    }
}

impl From<Option<RecursiveDependencyLoadState>> for SlotStatus {
    fn from(state: Option<RecursiveDependencyLoadState>) -> Self {
        match state {
            Some(RecursiveDependencyLoadState::Loaded) => SlotStatus::Ready,
            Some(RecursiveDependencyLoadState::Failed(err)) => SlotStatus::Failed(err.to_string()),
            _ => SlotStatus::Pending,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load {slot} from '{path}': {reason}")]
    AssetFailed {
        slot: AssetSlot,
        path: String,
        reason: String,
    },
}

/// Fully loaded scene assets. Only exists once every slot is ready.
#[derive(Resource, Clone, Debug)]
pub struct AssetBundle {
    pub earth_map: Handle<Image>,
    pub earth_roughness: Handle<Image>,
    pub earth_bump: Handle<Image>,
    pub decal: Handle<Image>,
    pub trail_mask: Handle<Image>,
    pub plane_model: Handle<Scene>,
}

/// Handles requested at startup and still waiting on the asset server
#[derive(Resource, Clone, Debug)]
pub struct PendingAssets {
    pub paths: AssetPaths,
    pub handles: AssetBundle,
}

impl PendingAssets {
    /// Kick off loading of every slot
    pub fn request(asset_server: &AssetServer, paths: &AssetPaths) -> Self {
        let handles = AssetBundle {
            earth_map: asset_server.load(paths.earth_map.clone()),
            earth_roughness: asset_server.load(paths.earth_roughness.clone()),
            earth_bump: asset_server.load(paths.earth_bump.clone()),
            decal: asset_server.load(paths.decal.clone()),
            // Mask values are read as raw data, not colors
            trail_mask: asset_server.load_with_settings(
                paths.trail_mask.clone(),
                |settings: &mut ImageLoaderSettings| settings.is_srgb = false,
            ),
            plane_model: asset_server
                .load(GltfAssetLabel::Scene(0).from_asset(paths.plane_model.clone())),
        };
        Self {
            paths: paths.clone(),
            handles,
        }
    }

    pub fn id(&self, slot: AssetSlot) -> UntypedAssetId {
        let handles = &self.handles;
        match slot {
            AssetSlot::EarthMap => handles.earth_map.id().untyped(),
            AssetSlot::EarthRoughness => handles.earth_roughness.id().untyped(),
            AssetSlot::EarthBump => handles.earth_bump.id().untyped(),
            AssetSlot::Decal => handles.decal.id().untyped(),
            AssetSlot::TrailMask => handles.trail_mask.id().untyped(),
            AssetSlot::PlaneModel => handles.plane_model.id().untyped(),
        }
    }

    /// Resolve the combined state of all slots.
    ///
    /// Any failure wins over pending slots; the bundle is only handed out once
    /// every slot reports ready.
    pub fn resolve(
        &self,
        mut status_of: impl FnMut(AssetSlot, UntypedAssetId) -> SlotStatus,
    ) -> Result<Option<AssetBundle>, LoadError> {
        let mut all_ready = true;
        for slot in AssetSlot::ALL {
            match status_of(slot, self.id(slot)) {
                SlotStatus::Ready => {}
                SlotStatus::Pending => all_ready = false,
                SlotStatus::Failed(reason) => {
                    return Err(LoadError::AssetFailed {
                        slot,
                        path: slot.path(&self.paths).to_string(),
                        reason,
                    });
                }
            }
        }

        Ok(all_ready.then(|| self.handles.clone()))
    }
}
