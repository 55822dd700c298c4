use std::f32::consts::FRAC_PI_2;

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

/// Showroom staging: camera, lighting rig, ground disc.
///
/// Consumed as a capability by the showcase; nothing here depends on load
/// state or the paint selection.
pub fn setup_showroom(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.97, 0.98, 0.99)),
            ..default()
        },
        Tonemapping::AcesFitted,
        Projection::Perspective(PerspectiveProjection {
            fov: 40.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_xyz(5.0, 2.5, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
    spawn_lighting(&mut commands);

    // Ground disc under the vehicle
    commands.spawn((
        Mesh3d(meshes.add(Circle::new(8.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xe5, 0xe7, 0xeb),
            perceptual_roughness: 0.8,
            metallic: 0.1,
            ..default()
        })),
        Transform::from_xyz(0.0, -1.2, 0.0).with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
    ));
}

/// One shadow-casting key light plus three fills, mirroring the studio rig
/// the showcase was tuned against.
fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 4_000.0,
            ..default()
        },
        Transform::from_xyz(-4.0, 6.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 5_000.0,
            ..default()
        },
        // Straight-down fill; Z up reference avoids a degenerate look-at.
        Transform::from_xyz(0.0, 10.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 3_000.0,
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
