/// Showcase manifest describing which model and textures to load.
///
/// Generated into `assets/` by the build script when absent; deployments can
/// replace it to point at a different vehicle without rebuilding.
pub const MANIFEST_PATH: &str = "showcase.json";

/// Defaults used when the manifest itself cannot be loaded.
pub const DEFAULT_MODEL_URI: &str = "car/scene.gltf";

/// Critical textures preloaded alongside the model. Individual failures are
/// tolerated; the list only drives the texture progress phase.
pub const DEFAULT_TEXTURE_URIS: &[&str] = &[
    "car/textures/carpaint_base_baseColor.png",
    "car/textures/brakedisk_metallicRoughness.png",
];
