use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::core::app_state::AppState;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;
use constants::loading::MODEL_DISPATCHED_PERCENT;
use constants::path::{DEFAULT_MODEL_URI, DEFAULT_TEXTURE_URIS, MANIFEST_PATH};

/// Showcase manifest as a Bevy asset. Mirrors the JSON structure exactly.
///
/// Carries asset *paths* only; which meshes are paintable stays with the
/// name-based classifier so arbitrary authored assets keep working.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct ShowcaseManifest {
    pub name: String,
    pub model_uri: String,
    pub texture_uris: Vec<String>,
}

/// Resolved asset locations for the current showcase session.
#[derive(Resource, Clone)]
pub struct ShowcaseAssets {
    pub model_uri: String,
    pub texture_uris: Vec<String>,
}

impl Default for ShowcaseAssets {
    fn default() -> Self {
        Self {
            model_uri: DEFAULT_MODEL_URI.to_string(),
            texture_uris: DEFAULT_TEXTURE_URIS
                .iter()
                .map(|uri| (*uri).to_string())
                .collect(),
        }
    }
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ShowcaseManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

/// Resolve the manifest into concrete URIs and dispatch the model fetch.
///
/// Manifest failure is not terminal: built-in defaults substitute and the
/// pipeline proceeds. Only the model fetch itself can fail the load.
pub fn resolve_manifest(
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<ShowcaseManifest>>,
    asset_server: Res<AssetServer>,
    mut model_loader: ResMut<ModelLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
    mut commands: Commands,
) {
    let Some(handle) = &manifest_loader.handle else {
        return;
    };

    let showcase = if let Some(manifest) = manifests.get(handle) {
        println!("✓ Showcase manifest loaded: {}", manifest.name);
        ShowcaseAssets {
            model_uri: manifest.model_uri.clone(),
            texture_uris: manifest.texture_uris.clone(),
        }
    } else {
        match asset_server.get_load_state(handle) {
            Some(LoadState::Failed(err)) => {
                warn!("Showcase manifest unavailable, using built-in defaults: {err}");
                ShowcaseAssets::default()
            }
            // Still in flight.
            _ => return,
        }
    };

    model_loader.dispatch(&asset_server, &showcase.model_uri);
    commands.insert_resource(showcase);

    // Early tick so the indicator never sits at zero while the model fetch
    // is in flight.
    loading_progress.advance(MODEL_DISPATCHED_PERCENT);
    next_state.set(AppState::ModelLoading);
}
