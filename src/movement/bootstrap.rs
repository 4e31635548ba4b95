//! Movement domain: player spawn and a small practice room.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::forms::{ActiveForm, Form};
use crate::movement::{
    ContactSensors, GameLayer, Ground, MotionController, Player, ProbeExtents, Wall,
};

/// Gravity scale the body starts with. The controller reads it once and derives
/// every per-tick scale from it.
const DEFAULT_GRAVITY_SCALE: f32 = 1.0;

pub(crate) fn spawn_player(mut commands: Commands) {
    let probe = ProbeExtents::default();
    let size = probe.half_size * 2.0;
    let gravity = GravityScale(DEFAULT_GRAVITY_SCALE);

    info!(
        "Spawning player: form={:?}, size={:?}, gravity_scale={}",
        Form::default(),
        size,
        gravity.0
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MotionController::new(gravity.0),
            ContactSensors::default(),
            ActiveForm::default(),
            probe,
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            Mass(1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            ConstantForce::default(),
            gravity,
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

fn spawn_block<M: Component>(
    commands: &mut Commands,
    marker: M,
    layer: GameLayer,
    color: Color,
    center: Vec2,
    size: Vec2,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        ground_color,
        Vec2::new(0.0, -200.0),
        Vec2::new(900.0, 40.0),
    );

    // Outer walls
    for x in [-470.0, 470.0] {
        spawn_block(
            &mut commands,
            Wall,
            GameLayer::Wall,
            wall_color,
            Vec2::new(x, 50.0),
            Vec2::new(40.0, 500.0),
        );
    }

    // Stepping platforms
    for (center, width) in [
        (Vec2::new(-250.0, -60.0), 150.0),
        (Vec2::new(250.0, 40.0), 150.0),
        (Vec2::new(0.0, 150.0), 120.0),
    ] {
        spawn_block(
            &mut commands,
            Ground,
            GameLayer::Ground,
            platform_color,
            center,
            Vec2::new(width, 20.0),
        );
    }

    // Chimney for alternating wall jumps
    for x in [-150.0, -60.0] {
        spawn_block(
            &mut commands,
            Wall,
            GameLayer::Wall,
            wall_color,
            Vec2::new(x, 20.0),
            Vec2::new(30.0, 300.0),
        );
    }
}
