//! Scene-side subsystems: body-mesh classification, paint binding, the
//! procedural fallback vehicle, and showroom staging.
//!
//! The binder mutates materials in place on classified entities only;
//! everything else in the loaded hierarchy (wheels, glass, interior trim) is
//! provably untouched. When the real asset cannot be shown, the fallback
//! vehicle takes over and is driven by the same paint selection.

/// Name-based body mesh classification.
pub mod classifier;

/// Procedural placeholder vehicle for degraded mode.
pub mod fallback;

/// Paint selection to material parameter binding.
pub mod material_binder;

/// Camera, lighting rig and ground disc.
pub mod showroom;
