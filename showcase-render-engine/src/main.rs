use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

mod configurator;
mod engine;
mod rpc;

use configurator::selection::{PaintSelection, PaintSelectionEvent, handle_selection_events};
use engine::core::app_state::AppState;
use engine::core::window_config::create_window_config;
use engine::loading::manifest_loader::{
    ManifestLoader, ShowcaseManifest, resolve_manifest, start_loading,
};
use engine::loading::model_loader::{ModelLoader, poll_model};
use engine::loading::progress::LoadingProgress;
use engine::loading::scene_creator::{VehicleScene, spawn_vehicle_when_ready};
use engine::loading::texture_loader::{TextureLoader, check_texture_loading};
use engine::scene::fallback::{
    announce_fallback, repaint_fallback, rock_fallback_vehicle, spawn_fallback_vehicle,
};
use engine::scene::material_binder::{MaterialNameIndex, apply_paint_on_change};
use engine::scene::showroom::setup_showroom;
use engine::systems::loading_overlay::{
    despawn_loading_overlay, spawn_loading_overlay, update_loading_overlay,
};
use engine::systems::turntable::turntable_camera;
use rpc::web_rpc::WebRpcPlugin;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

/// Create application with staged loading and paint configurator wiring
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<ShowcaseManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .init_state::<AppState>();

    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<TextureLoader>()
        .init_resource::<VehicleScene>()
        .init_resource::<MaterialNameIndex>()
        .init_resource::<PaintSelection>()
        .add_event::<PaintSelectionEvent>()
        .add_systems(
            Startup,
            (setup_showroom, spawn_loading_overlay, start_loading),
        )
        .add_systems(
            Update,
            (
                resolve_manifest.run_if(in_state(AppState::Idle)),
                poll_model.run_if(in_state(AppState::ModelLoading)),
                (check_texture_loading, spawn_vehicle_when_ready)
                    .chain()
                    .run_if(in_state(AppState::TextureLoading)),
                handle_selection_events,
                update_loading_overlay,
            ),
        )
        .add_systems(
            Update,
            apply_paint_on_change
                .run_if(in_state(AppState::Ready).and(resource_changed::<PaintSelection>)),
        )
        .add_systems(
            Update,
            (
                repaint_fallback.run_if(resource_changed::<PaintSelection>),
                rock_fallback_vehicle,
            )
                .run_if(in_state(AppState::Fallback)),
        )
        .add_systems(
            Update,
            turntable_camera.run_if(in_state(AppState::Ready).or(in_state(AppState::Fallback))),
        )
        .add_systems(OnEnter(AppState::Ready), despawn_loading_overlay)
        .add_systems(
            OnEnter(AppState::Fallback),
            (despawn_loading_overlay, spawn_fallback_vehicle, announce_fallback).chain(),
        );

    #[cfg(not(target_arch = "wasm32"))]
    {
        use configurator::keyboard::handle_paint_shortcuts;
        use engine::systems::terminal_progress::{TerminalProgress, update_terminal_progress};

        app.init_resource::<TerminalProgress>()
            .add_systems(Update, (handle_paint_shortcuts, update_terminal_progress));
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
