use bevy::prelude::*;

use constants::showroom::TURNTABLE_SPEED;

/// Slow orbit of the camera around the showcased vehicle.
pub fn turntable_camera(
    time: Res<Time>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let rotation = Quat::from_rotation_y(time.delta_secs() * TURNTABLE_SPEED);
    for mut transform in &mut cameras {
        let orbited = rotation * transform.translation;
        *transform = Transform::from_translation(orbited).looking_at(Vec3::ZERO, Vec3::Y);
    }
}
