// build.rs
use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Default showcase manifest: which model to load and which textures are
    // critical enough to gate the loading indicator.
    let manifest = serde_json::json!({
        "name": "VELOCITY Apex GT",
        "model_uri": "car/scene.gltf",
        "texture_uris": [
            "car/textures/carpaint_base_baseColor.png",
            "car/textures/brakedisk_metallicRoughness.png"
        ]
    });

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let assets_dir = manifest_dir.join("assets");
    fs::create_dir_all(&assets_dir).ok(); // Create assets dir if it doesn't exist

    let json_content = serde_json::to_string_pretty(&manifest).unwrap();

    // Only seed the manifest; a hand-edited showcase.json wins.
    let manifest_path = assets_dir.join("showcase.json");
    if !manifest_path.exists() {
        fs::write(&manifest_path, &json_content).expect("Failed to write showcase.json to assets");
        println!("cargo:warning=Generated default manifest in assets/showcase.json");
    }
}
