use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::{LoadingProgress, abandon_to_fallback};
use crate::engine::scene::material_binder::on_vehicle_scene_ready;
use crate::rpc::web_rpc::WebRpcInterface;
use constants::loading::TEXTURES_SETTLED_PERCENT;
use constants::showroom::{VEHICLE_OFFSET, VEHICLE_SCALE};

/// Marker on the spawned glTF scene root.
#[derive(Component)]
pub struct VehicleSceneRoot;

#[derive(Resource, Default)]
pub struct VehicleScene {
    pub spawned: bool,
}

/// Spawn the vehicle scene once the texture phase has settled.
///
/// The scene-ready observer attached here performs classification and the
/// first paint binding. A model that parsed but carries no scene at all is
/// treated like a model failure and hands over to the fallback renderer.
pub fn spawn_vehicle_when_ready(
    mut vehicle_scene: ResMut<VehicleScene>,
    mut loading_progress: ResMut<LoadingProgress>,
    model_loader: Res<ModelLoader>,
    gltf_assets: Res<Assets<Gltf>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut next_state: ResMut<NextState<AppState>>,
    mut commands: Commands,
) {
    if vehicle_scene.spawned || loading_progress.percent() < TEXTURES_SETTLED_PERCENT {
        return;
    }

    let Some(gltf) = model_loader.handle().and_then(|handle| gltf_assets.get(handle)) else {
        return;
    };

    let Some(scene_handle) = gltf
        .default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
    else {
        abandon_to_fallback(
            "vehicle model contains no scene".to_string(),
            &mut loading_progress,
            &mut rpc_interface,
            &mut next_state,
        );
        return;
    };

    commands
        .spawn((
            VehicleSceneRoot,
            SceneRoot(scene_handle),
            Transform::from_translation(VEHICLE_OFFSET).with_scale(Vec3::splat(VEHICLE_SCALE)),
        ))
        .observe(on_vehicle_scene_ready);

    vehicle_scene.spawned = true;
}
