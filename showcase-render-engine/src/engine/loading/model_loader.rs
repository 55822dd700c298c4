use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::loading::manifest_loader::ShowcaseAssets;
use crate::engine::loading::progress::{LoadingProgress, abandon_to_fallback};
use crate::engine::loading::texture_loader::TextureLoader;
use crate::rpc::web_rpc::WebRpcInterface;
use constants::loading::MODEL_LOADED_PERCENT;

/// Tracks the in-flight vehicle model fetch.
///
/// Dispatch is de-duplicated by URI: requesting the same URI again while a
/// load is in flight (or finished) is a no-op.
#[derive(Resource, Default)]
pub struct ModelLoader {
    uri: Option<String>,
    handle: Option<Handle<Gltf>>,
}

impl ModelLoader {
    pub fn dispatch(&mut self, asset_server: &AssetServer, uri: &str) {
        if self.uri.as_deref() == Some(uri) {
            return;
        }
        info!("Dispatching vehicle model fetch: {uri}");
        self.handle = Some(asset_server.load(uri.to_owned()));
        self.uri = Some(uri.to_owned());
    }

    pub fn handle(&self) -> Option<&Handle<Gltf>> {
        self.handle.as_ref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

/// Poll the model fetch and advance the pipeline on completion.
///
/// A loaded model starts the texture phase; a failed model is the one
/// terminal failure of the whole load and hands the session to the fallback
/// renderer with progress abandoned at its last value.
pub fn poll_model(
    model_loader: Res<ModelLoader>,
    asset_server: Res<AssetServer>,
    showcase: Res<ShowcaseAssets>,
    mut texture_loader: ResMut<TextureLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = model_loader.handle() else {
        return;
    };

    match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            println!("✓ Vehicle model loaded");
            loading_progress.advance(MODEL_LOADED_PERCENT);
            texture_loader.dispatch(&asset_server, &showcase.texture_uris);
            next_state.set(AppState::TextureLoading);
        }
        Some(LoadState::Failed(err)) => {
            abandon_to_fallback(
                format!("vehicle model failed to load: {err}"),
                &mut loading_progress,
                &mut rpc_interface,
                &mut next_state,
            );
        }
        _ => {}
    }
}
