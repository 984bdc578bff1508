//! Asset loading module
//!
//! Two-phase lifecycle: every asset is requested at startup and the app sits
//! in [`AppState::Loading`] until all of them are ready. Only then is the
//! [`AssetBundle`] inserted and the scene built.

use bevy::prelude::*;

pub mod bundle;
pub mod mask;

pub use bundle::{AssetBundle, AssetSlot, LoadError, PendingAssets, SlotStatus, SlotStatuses};

use crate::config::SceneConfig;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Plugin for the asset load barrier
pub struct SceneAssetsPlugin;

impl Plugin for SceneAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<SlotStatuses>()
            .add_systems(Startup, begin_asset_load)
            .add_systems(
                Update,
                (read_slot_statuses, apply_asset_load)
                    .chain()
                    .run_if(in_state(AppState::Loading)),
            );
    }
}

/// Request every asset named in the config
pub fn begin_asset_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    info!("Loading {} scene assets", AssetSlot::ALL.len());
    commands.insert_resource(PendingAssets::request(&asset_server, &config.assets));
}

/// Copy the asset server's view of each pending slot into [`SlotStatuses`]
pub fn read_slot_statuses(
    asset_server: Res<AssetServer>,
    pending: Option<Res<PendingAssets>>,
    mut statuses: ResMut<SlotStatuses>,
) {
    let Some(pending) = pending else {
        return;
    };
    for slot in AssetSlot::ALL {
        let state = asset_server.get_recursive_dependency_load_state(pending.id(slot));
        statuses.0.insert(slot, state.into());
    }
}

/// Wait for every slot, then publish the bundle and move to `Running`
pub fn apply_asset_load(
    mut commands: Commands,
    statuses: Res<SlotStatuses>,
    pending: Option<Res<PendingAssets>>,
    mut images: ResMut<Assets<Image>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(pending) = pending else {
        return;
    };

    match pending.resolve(|slot, _| statuses.get(slot)) {
        Ok(None) => {}
        Ok(Some(mut bundle)) => {
            bundle.trail_mask = trail_alpha_mask(&mut images, bundle.trail_mask);
            info!("Scene assets loaded");
            commands.insert_resource(bundle);
            commands.remove_resource::<PendingAssets>();
            next_state.set(AppState::Running);
        }
        Err(err) => {
            error!("{}", err);
            commands.remove_resource::<PendingAssets>();
            exit.write(AppExit::error());
        }
    }
}

/// Swap the loaded mask for its green-to-alpha conversion.
///
/// Falls back to the raw mask if it can't be read.
fn trail_alpha_mask(images: &mut Assets<Image>, raw: Handle<Image>) -> Handle<Image> {
    let Some(image) = images.get(&raw) else {
        warn!("Trail mask missing from image assets, using it unconverted");
        return raw;
    };
    match mask::alpha_from_green(image) {
        Ok(converted) => images.add(converted),
        Err(err) => {
            warn!("Could not convert trail mask: {:?}", err);
            raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssetPaths;
    use crate::core::rng::SceneRng;
    use crate::orbital::OrbitingObject;
    use crate::planes::PlanesPlugin;
    use bevy::state::app::StatesPlugin;

    fn create_loading_app() -> (App, Handle<Image>) {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .init_resource::<Assets<Image>>()
            .init_resource::<SlotStatuses>()
            .add_systems(
                Update,
                apply_asset_load.run_if(in_state(AppState::Loading)),
            );

        let mask_handle = app
            .world_mut()
            .resource_mut::<Assets<Image>>()
            .add(mask::rgba_mask(1, 1, &[[0, 200, 0, 255]]));
        let handles = AssetBundle {
            earth_map: Handle::default(),
            earth_roughness: Handle::default(),
            earth_bump: Handle::default(),
            decal: Handle::default(),
            trail_mask: mask_handle.clone(),
            plane_model: Handle::default(),
        };
        app.insert_resource(PendingAssets {
            paths: AssetPaths::default(),
            handles,
        });
        (app, mask_handle)
    }

    fn report_all(app: &mut App, status: SlotStatus) {
        let mut statuses = app.world_mut().resource_mut::<SlotStatuses>();
        for slot in AssetSlot::ALL {
            statuses.0.insert(slot, status.clone());
        }
    }

    fn state(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    #[test]
    fn test_waits_while_any_slot_pending() {
        let (mut app, _) = create_loading_app();
        report_all(&mut app, SlotStatus::Ready);
        app.world_mut()
            .resource_mut::<SlotStatuses>()
            .0
            .insert(AssetSlot::PlaneModel, SlotStatus::Pending);

        app.update();
        app.update();

        assert_eq!(state(&app), AppState::Loading);
        assert!(app.world().get_resource::<AssetBundle>().is_none());
        assert!(app.world().get_resource::<PendingAssets>().is_some());
    }

    #[test]
    fn test_ready_publishes_bundle_and_runs() {
        let (mut app, mask_handle) = create_loading_app();
        report_all(&mut app, SlotStatus::Ready);

        app.update();
        app.update();

        assert_eq!(state(&app), AppState::Running);
        assert!(app.world().get_resource::<PendingAssets>().is_none());
        let bundle = app.world().resource::<AssetBundle>();
        assert_ne!(bundle.trail_mask, mask_handle);

        let images = app.world().resource::<Assets<Image>>();
        let trail = images.get(&bundle.trail_mask).expect("converted mask");
        let data = trail.data.as_ref().expect("pixel data");
        assert_eq!(&data[0..4], &[255, 255, 255, 200]);
    }

    #[test]
    fn test_planes_spawn_only_after_load() {
        let (mut app, _) = create_loading_app();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(SceneConfig::default())
            .insert_resource(SceneRng::seeded(1))
            .add_plugins(PlanesPlugin);

        app.update();
        app.update();
        let mut query = app.world_mut().query::<&OrbitingObject>();
        assert_eq!(query.iter(app.world()).count(), 0);

        report_all(&mut app, SlotStatus::Ready);
        app.update();
        app.update();
        let mut query = app.world_mut().query::<&OrbitingObject>();
        assert_eq!(query.iter(app.world()).count(), 10);
    }

    #[test]
    fn test_failure_exits_with_error() {
        let (mut app, _) = create_loading_app();
        report_all(&mut app, SlotStatus::Ready);
        app.world_mut()
            .resource_mut::<SlotStatuses>()
            .0
            .insert(AssetSlot::Decal, SlotStatus::Failed("missing file".to_string()));

        app.update();

        assert!(app.world().get_resource::<PendingAssets>().is_none());
        assert!(app.world().get_resource::<AssetBundle>().is_none());
        assert_eq!(app.should_exit(), Some(AppExit::error()));
        assert_eq!(state(&app), AppState::Loading);
    }

    #[test]
    fn test_unreadable_mask_is_kept() {
        let mut images = Assets::<Image>::default();
        let missing = Handle::<Image>::default();
        assert_eq!(trail_alpha_mask(&mut images, missing.clone()), missing);
    }
}
