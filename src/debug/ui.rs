//! Debug domain: overlay components and layout.

use bevy::prelude::*;

/// Marker for the motion info overlay
#[derive(Component, Debug)]
pub struct MotionOverlay;

pub(crate) fn spawn_motion_overlay(commands: &mut Commands) {
    commands.spawn((
        MotionOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
