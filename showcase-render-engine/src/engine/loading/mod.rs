//! Asset loading and initialisation systems for the car showcase.
//!
//! Manages the multi-stage loading pipeline from manifest parsing through
//! model and texture fetching to final scene instantiation, with monotonic
//! progress tracking throughout. The model fetch is fail-fast; texture
//! fetches settle individually and never abort the batch.

/// Showcase manifest loading and URI resolution from JSON configuration.
///
/// Falls back to built-in default paths when the manifest is unavailable and
/// dispatches the model fetch once URIs are known.
pub mod manifest_loader;

/// Vehicle model (glTF) fetch with request de-duplication by URI.
pub mod model_loader;

/// Vehicle scene instantiation once the texture phase settles.
///
/// Spawns the glTF scene root and attaches the scene-ready binding observer.
pub mod scene_creator;

/// Loading progress resource and pure phase derivation.
///
/// Monotonic percentage, terminal load outcome, and the fixed three-phase
/// labelling consumed by every progress surface.
pub mod progress;

/// Critical texture preloading with settle-all semantics.
///
/// Tracks each texture until it loads or fails; failures are logged and
/// counted as settled so progress keeps moving.
pub mod texture_loader;
