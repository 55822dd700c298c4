use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::configurator::selection::{PaintSelection, colour_from_hex};
use crate::engine::loading::scene_creator::VehicleSceneRoot;
use crate::engine::scene::material_binder::apply_finish;
use crate::rpc::web_rpc::WebRpcInterface;
use constants::fallback_body::{
    BODY_SIZE, CABIN_OFFSET, CABIN_SIZE, GROUP_OFFSET, ROCK_AMPLITUDE, ROCK_SPEED, WHEEL_COLOUR,
    WHEEL_OFFSETS, WHEEL_RADIUS, WHEEL_WIDTH,
};

/// Marker for the placeholder vehicle group.
#[derive(Component)]
pub struct FallbackVehicle;

/// The one paint material shared by the placeholder body and cabin.
#[derive(Resource)]
pub struct FallbackPaint(Handle<StandardMaterial>);

/// Raise the use-fallback flag for the composition layer.
pub fn announce_fallback(mut rpc_interface: ResMut<WebRpcInterface>) {
    rpc_interface.send_notification("fallback_active", serde_json::json!({}));
}

/// Replace the real asset with the procedural placeholder (OnEnter(Fallback)).
///
/// Body and cabin take the current paint selection through the same finish
/// profiles as the real vehicle; wheels keep a fixed neutral appearance.
pub fn spawn_fallback_vehicle(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    selection: Res<PaintSelection>,
    real_scene: Query<Entity, With<VehicleSceneRoot>>,
) {
    // Whatever survived of the real asset comes down first.
    for entity in &real_scene {
        commands.entity(entity).despawn();
    }

    let mut paint = StandardMaterial::default();
    apply_finish(&mut paint, &selection);
    let paint = materials.add(paint);
    commands.insert_resource(FallbackPaint(paint.clone()));

    let wheel_material = materials.add(StandardMaterial {
        base_color: colour_from_hex(WHEEL_COLOUR),
        perceptual_roughness: 0.8,
        ..default()
    });
    let wheel_mesh = meshes.add(Cylinder::new(WHEEL_RADIUS, WHEEL_WIDTH));

    commands
        .spawn((
            FallbackVehicle,
            Transform::from_translation(GROUP_OFFSET),
            Visibility::default(),
        ))
        .with_children(|group| {
            group.spawn((
                Mesh3d(meshes.add(Cuboid::from_size(BODY_SIZE))),
                MeshMaterial3d(paint.clone()),
            ));
            group.spawn((
                Mesh3d(meshes.add(Cuboid::from_size(CABIN_SIZE))),
                MeshMaterial3d(paint.clone()),
                Transform::from_translation(CABIN_OFFSET),
            ));
            for offset in WHEEL_OFFSETS {
                group.spawn((
                    Mesh3d(wheel_mesh.clone()),
                    MeshMaterial3d(wheel_material.clone()),
                    Transform::from_translation(offset)
                        .with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
                ));
            }
        });

    println!("✓ Placeholder vehicle spawned");
}

/// Keep the placeholder paint in sync with the selection.
pub fn repaint_fallback(
    selection: Res<PaintSelection>,
    paint: Res<FallbackPaint>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if let Some(material) = materials.get_mut(&paint.0) {
        apply_finish(material, &selection);
    }
}

/// Gentle idle rocking so degraded mode does not look frozen.
pub fn rock_fallback_vehicle(
    time: Res<Time>,
    mut vehicles: Query<&mut Transform, With<FallbackVehicle>>,
) {
    let angle = (time.elapsed_secs() * ROCK_SPEED).sin() * ROCK_AMPLITUDE;
    for mut transform in &mut vehicles {
        transform.rotation = Quat::from_rotation_y(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configurator::selection::PaintFinish;

    #[test]
    fn placeholder_spawns_body_cabin_and_four_wheels() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<PaintSelection>()
            .add_systems(Update, spawn_fallback_vehicle);
        app.update();

        let mut groups = app
            .world_mut()
            .query_filtered::<&Children, With<FallbackVehicle>>();
        let children = groups.single(app.world()).unwrap();
        assert_eq!(children.len(), 6);
        assert!(app.world().contains_resource::<FallbackPaint>());
    }

    #[test]
    fn repaint_drives_the_shared_paint_material_and_spares_the_wheels() {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>();

        let (paint, wheel) = {
            let mut materials = app
                .world_mut()
                .resource_mut::<Assets<StandardMaterial>>();
            let paint = materials.add(StandardMaterial::default());
            let wheel = materials.add(StandardMaterial {
                base_color: colour_from_hex(WHEEL_COLOUR),
                perceptual_roughness: 0.8,
                ..default()
            });
            (paint, wheel)
        };
        app.insert_resource(FallbackPaint(paint.clone()));
        app.insert_resource(PaintSelection {
            colour: 0xdc2626,
            finish: PaintFinish::Metallic,
        });
        app.add_systems(Update, repaint_fallback);
        app.update();

        let materials = app.world().resource::<Assets<StandardMaterial>>();
        let painted = materials.get(&paint).unwrap();
        assert_eq!(painted.base_color, Color::srgb_u8(0xdc, 0x26, 0x26));
        assert_eq!(painted.metallic, 0.9);
        assert_eq!(painted.perceptual_roughness, 0.1);

        let wheel = materials.get(&wheel).unwrap();
        assert_eq!(wheel.base_color, colour_from_hex(WHEEL_COLOUR));
        assert_eq!(wheel.perceptual_roughness, 0.8);
    }

    #[test]
    fn entering_fallback_raises_the_use_fallback_flag() {
        let mut app = App::new();
        app.init_resource::<WebRpcInterface>()
            .add_systems(Update, announce_fallback);
        app.update();

        let rpc_interface = app.world().resource::<WebRpcInterface>();
        assert!(
            rpc_interface
                .pending_notifications()
                .iter()
                .any(|notification| notification.method == "fallback_active")
        );
    }
}
