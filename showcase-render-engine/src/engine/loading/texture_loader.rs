use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;
use constants::loading::{MODEL_LOADED_PERCENT, TEXTURE_PHASE_SPAN, TEXTURES_SETTLED_PERCENT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum TextureState {
    #[default]
    InFlight,
    Loaded,
    Failed,
}

struct TextureEntry {
    uri: String,
    handle: Handle<Image>,
    state: TextureState,
}

/// Per-texture load tracking with settle-all semantics.
///
/// A texture settles when it loads OR fails; a failure is logged and never
/// aborts the batch, so the texture phase always completes once the model is
/// in. Fetches are dispatched together and settle in any order; progress is
/// settled-over-total, not position in the list.
#[derive(Resource, Default)]
pub struct TextureLoader {
    entries: Vec<TextureEntry>,
    dispatched: bool,
    settled_reported: bool,
}

impl TextureLoader {
    /// Dispatch all texture fetches concurrently. Repeat dispatch is a no-op.
    pub fn dispatch(&mut self, asset_server: &AssetServer, uris: &[String]) {
        if self.dispatched {
            return;
        }
        self.entries = uris
            .iter()
            .map(|uri| TextureEntry {
                uri: uri.clone(),
                handle: asset_server.load::<Image>(uri.clone()),
                state: TextureState::default(),
            })
            .collect();
        self.dispatched = true;
        info!("Dispatched {} critical texture fetches", self.entries.len());
    }
}

// Check texture load states and advance progress proportionally
pub fn check_texture_loading(
    mut texture_loader: ResMut<TextureLoader>,
    asset_server: Res<AssetServer>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    if !texture_loader.dispatched || texture_loader.settled_reported {
        return;
    }

    for entry in &mut texture_loader.entries {
        if entry.state != TextureState::InFlight {
            continue;
        }
        match asset_server.get_load_state(&entry.handle) {
            Some(LoadState::Loaded) => entry.state = TextureState::Loaded,
            Some(LoadState::Failed(err)) => {
                warn!("Texture {} failed to load, continuing without it: {err}", entry.uri);
                entry.state = TextureState::Failed;
            }
            _ => {}
        }
    }

    let total = texture_loader.entries.len();
    let settled = texture_loader
        .entries
        .iter()
        .filter(|entry| entry.state != TextureState::InFlight)
        .count();

    if total > 0 {
        let target = MODEL_LOADED_PERCENT + (settled as u32 * TEXTURE_PHASE_SPAN) / total as u32;
        // Read before write so change detection only fires on real movement.
        if target > loading_progress.percent() {
            loading_progress.advance(target);
        }
    }

    // An empty texture list settles immediately.
    if settled == total {
        loading_progress.advance(TEXTURES_SETTLED_PERCENT);
        texture_loader.settled_reported = true;
        println!("✓ All critical textures settled ({settled}/{total})");
    }
}
