//! Debug domain: overlay toggling and refresh.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{MotionOverlay, spawn_motion_overlay};
use crate::forms::ActiveForm;
use crate::movement::{ContactSensors, DashState, MotionController, Player, TimerKind};

/// Toggle the motion overlay with F3
pub(crate) fn toggle_motion_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_motion = !debug_state.show_motion;
        info!("Motion overlay: {}", debug_state.show_motion);
    }
}

fn describe_dash(state: DashState) -> String {
    match state {
        DashState::Ready => "ready".to_string(),
        DashState::Dashing { elapsed, .. } => format!("dashing {:.2}s", elapsed),
        DashState::Cooldown { elapsed } => format!("cooldown {:.2}s", elapsed),
    }
}

pub(crate) fn update_motion_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<
        (
            &MotionController,
            &ContactSensors,
            &ActiveForm,
            &LinearVelocity,
            &GravityScale,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<MotionOverlay>>,
    existing_overlay: Query<Entity, With<MotionOverlay>>,
) {
    if !debug_state.show_motion {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_motion_overlay(&mut commands);
        return;
    }

    let (Some((controller, sensors, form, velocity, gravity)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    else {
        return;
    };

    let state = controller.state();
    let timers = controller.timers();
    **text = format!(
        "Form: {:?}\nPhase: {}\nFacing: {:?}\nVel: ({:.0}, {:.0})  g: {:.2}\n\
         Jump: {} Wall: {} Cut: {} Fall: {}\n\
         Grace: ground {:.2} buffer {:.2} wallL {:.2} wallR {:.2}\n\
         Contacts: ground {} left {} right {}\nDash: {}",
        form.0,
        controller.phase().label(),
        controller.facing(),
        velocity.x,
        velocity.y,
        gravity.0,
        state.is_jumping,
        state.is_wall_jumping,
        state.is_jump_cut,
        state.is_jump_falling,
        timers.value(TimerKind::GroundedGrace),
        timers.value(TimerKind::JumpBuffer),
        timers.value(TimerKind::WallGraceLeft),
        timers.value(TimerKind::WallGraceRight),
        sensors.grounded,
        sensors.wall_left,
        sensors.wall_right,
        describe_dash(controller.dash().state()),
    );
}
