use std::collections::HashMap;

use bevy::asset::AssetId;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::configurator::selection::PaintSelection;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::{LoadingProgress, abandon_to_fallback};
use crate::engine::scene::classifier::is_body_mesh;
use crate::rpc::web_rpc::WebRpcInterface;

/// Marker inserted on every renderable entity of the loaded vehicle scene.
///
/// The binder traverses exactly these entities; fallback primitives and
/// showroom staging carry their own markers and are never painted here.
#[derive(Component)]
pub struct CarSceneNode;

/// Material names recovered from the glTF asset.
///
/// Bevy does not keep material names on scene entities, but the classifier
/// needs them: a mesh named `mesh_012` with a `carpaint_base` material is
/// body paint. Rebuilt on every scene (re)load, never carried across assets.
#[derive(Resource, Default)]
pub struct MaterialNameIndex(HashMap<AssetId<StandardMaterial>, String>);

impl MaterialNameIndex {
    pub fn insert(&mut self, id: AssetId<StandardMaterial>, name: String) {
        self.0.insert(id, name);
    }

    pub fn get(&self, id: AssetId<StandardMaterial>) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }
}

/// Write the current selection onto one material. Classification stays with
/// the caller; this only ever runs for body meshes.
pub fn apply_finish(material: &mut StandardMaterial, selection: &PaintSelection) {
    let profile = selection.finish.profile();
    material.base_color = selection.body_colour();
    material.metallic = profile.metallic;
    material.perceptual_roughness = profile.perceptual_roughness;
}

/// Scene-ready binding: classify the instantiated hierarchy and paint it.
///
/// Also the display-time failure boundary: an instantiated scene with no
/// renderable meshes is malformed, and the session transfers to the fallback
/// renderer instead of showing a blank stage.
pub fn on_vehicle_scene_ready(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    children: Query<&Children>,
    names: Query<&Name>,
    mesh_materials: Query<&MeshMaterial3d<StandardMaterial>>,
    model_loader: Res<ModelLoader>,
    gltf_assets: Res<Assets<Gltf>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    selection: Res<PaintSelection>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let root = trigger.target();

    let mut name_index = MaterialNameIndex::default();
    if let Some(gltf) = model_loader.handle().and_then(|handle| gltf_assets.get(handle)) {
        for (name, handle) in &gltf.named_materials {
            name_index.insert(handle.id(), name.to_string());
        }
    }

    let mut meshes_found = 0;
    let mut painted = 0;
    for entity in children.iter_descendants(root) {
        let Ok(material_ref) = mesh_materials.get(entity) else {
            continue;
        };
        meshes_found += 1;
        commands.entity(entity).insert(CarSceneNode);

        let node_name = names.get(entity).map(Name::as_str).unwrap_or("");
        if is_body_mesh(node_name, name_index.get(material_ref.id()))
            && let Some(material) = materials.get_mut(material_ref.id())
        {
            apply_finish(material, &selection);
            painted += 1;
        }
    }

    if meshes_found == 0 {
        abandon_to_fallback(
            "instantiated vehicle scene has no renderable meshes".to_string(),
            &mut loading_progress,
            &mut rpc_interface,
            &mut next_state,
        );
        return;
    }
    if painted == 0 {
        // Silent visual defect, not an error path: the selection simply has
        // no visible effect until the vocabulary covers this asset.
        warn!(
            "No meshes in {} matched the body paint vocabulary",
            model_loader.uri().unwrap_or("<unknown model>")
        );
    }

    commands.insert_resource(name_index);
    loading_progress.complete();
    println!("✓ Vehicle scene ready ({meshes_found} meshes, {painted} painted)");
    next_state.set(AppState::Ready);
}

/// Full re-traversal on every selection change.
///
/// Deliberately not an incremental diff: classification itself can change
/// when the scene is replaced, so each pass re-classifies every tagged node.
pub fn apply_paint_on_change(
    selection: Res<PaintSelection>,
    name_index: Res<MaterialNameIndex>,
    nodes: Query<(Option<&Name>, &MeshMaterial3d<StandardMaterial>), With<CarSceneNode>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (name, material_ref) in &nodes {
        let node_name = name.map(Name::as_str).unwrap_or("");
        if is_body_mesh(node_name, name_index.get(material_ref.id()))
            && let Some(material) = materials.get_mut(material_ref.id())
        {
            apply_finish(material, &selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configurator::selection::PaintFinish;

    fn showroom_nodes() -> Vec<(&'static str, Option<&'static str>, StandardMaterial)> {
        vec![
            ("Body_Paint_01", Some("carpaint_base"), StandardMaterial::default()),
            ("mesh_044", Some("carpaint"), StandardMaterial::default()),
            ("wheel_rim_left", None, StandardMaterial::default()),
            ("glass_windshield", Some("glass_clear"), StandardMaterial::default()),
        ]
    }

    fn paint_all(
        nodes: &mut [(&str, Option<&str>, StandardMaterial)],
        selection: &PaintSelection,
    ) {
        for (node_name, material_name, material) in nodes.iter_mut() {
            if is_body_mesh(node_name, *material_name) {
                apply_finish(material, selection);
            }
        }
    }

    #[test]
    fn racing_red_metallic_paints_body_only() {
        let selection = PaintSelection {
            colour: 0xdc2626,
            finish: PaintFinish::Metallic,
        };
        let mut nodes = showroom_nodes();
        paint_all(&mut nodes, &selection);

        for (node_name, material_name, material) in &nodes {
            if is_body_mesh(node_name, *material_name) {
                assert_eq!(material.base_color, Color::srgb_u8(0xdc, 0x26, 0x26));
                assert_eq!(material.metallic, 0.9);
                assert_eq!(material.perceptual_roughness, 0.1);
            }
        }
    }

    #[test]
    fn non_body_nodes_are_untouched() {
        let selection = PaintSelection {
            colour: 0xdc2626,
            finish: PaintFinish::Matte,
        };
        let mut nodes = showroom_nodes();
        paint_all(&mut nodes, &selection);

        let untouched = StandardMaterial::default();
        for (node_name, material_name, material) in &nodes {
            if !is_body_mesh(node_name, *material_name) {
                assert_eq!(material.base_color, untouched.base_color);
                assert_eq!(material.metallic, untouched.metallic);
                assert_eq!(material.perceptual_roughness, untouched.perceptual_roughness);
            }
        }
    }

    #[test]
    fn reapplying_a_selection_is_idempotent() {
        let selection = PaintSelection {
            colour: 0x1ecbe1,
            finish: PaintFinish::Glossy,
        };
        let mut once = showroom_nodes();
        paint_all(&mut once, &selection);
        let mut twice = showroom_nodes();
        paint_all(&mut twice, &selection);
        paint_all(&mut twice, &selection);

        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.2.base_color, b.2.base_color);
            assert_eq!(a.2.metallic, b.2.metallic);
            assert_eq!(a.2.perceptual_roughness, b.2.perceptual_roughness);
        }
    }

    #[test]
    fn finish_profile_is_independent_of_colour() {
        for colour in [0xffffff_u32, 0x000000, 0x059669] {
            let selection = PaintSelection {
                colour,
                finish: PaintFinish::Matte,
            };
            let mut material = StandardMaterial::default();
            apply_finish(&mut material, &selection);
            assert_eq!(material.metallic, 0.1);
            assert_eq!(material.perceptual_roughness, 0.9);
        }
    }
}
