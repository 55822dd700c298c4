use bevy::prelude::*;

use crate::engine::loading::progress::{LoadingProgress, report_phase};

#[derive(Component)]
pub struct LoadingText;

pub fn spawn_loading_overlay(mut commands: Commands) {
    commands.spawn((
        LoadingText,
        Text::new("Loading 3D model..."),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.86, 0.15, 0.15)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(24.0),
            left: Val::Px(24.0),
            ..default()
        },
    ));
}

pub fn update_loading_overlay(
    loading_progress: Res<LoadingProgress>,
    mut texts: Query<&mut Text, With<LoadingText>>,
) {
    if !loading_progress.is_changed() {
        return;
    }
    let report = report_phase(loading_progress.percent());
    for mut text in &mut texts {
        text.0 = format!("{}... {}%", report.label, report.percent);
    }
}

/// Removed on both terminal states; the overlay only exists while loading.
pub fn despawn_loading_overlay(
    mut commands: Commands,
    texts: Query<Entity, With<LoadingText>>,
) {
    for entity in &texts {
        commands.entity(entity).despawn();
    }
}
