use bevy::prelude::*;

/// Showcase lifecycle.
///
/// `Idle` covers the manifest fetch; the model fetch moves the app to
/// `ModelLoading`, texture preloading to `TextureLoading`, and scene
/// instantiation to `Ready`. `Fallback` is reached when the model fetch
/// fails, or when an instantiated scene turns out to contain nothing
/// renderable. Both `Ready` and `Fallback` are terminal for the session:
/// there is no automatic retry of the real asset.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Idle,
    ModelLoading,
    TextureLoading,
    Ready,
    Fallback,
}
