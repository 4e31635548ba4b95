//! Debug overlay for tuning motion feel.
//!
//! F3 shows the player's form, motion phase, flags, grace timers, contacts and
//! dash state, refreshed every frame.

mod state;
mod systems;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{toggle_motion_overlay, update_motion_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_motion_overlay, update_motion_overlay).chain(),
        );
    }
}
