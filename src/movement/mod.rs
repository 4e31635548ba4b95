//! Movement domain: the motion state machine and its bevy/avian plumbing.
//!
//! The core (`controller`, `timers`, `dash`, `state`, `input`, `sensors`,
//! `commands`, `params`) is plain data and arithmetic with no ECS access.
//! `systems` and `bootstrap` adapt it to the engine.

mod bootstrap;
mod commands;
mod components;
mod controller;
mod dash;
mod input;
mod params;
mod resources;
mod sensors;
mod state;
mod systems;
mod timers;


pub use commands::{GravityBranch, Impulse, ImpulseKind, MotionCommands};
pub use components::{GameLayer, Ground, Player, ProbeExtents, Wall};
pub use controller::{MotionController, WallJumpDirection, select_gravity};
pub use dash::{DashEvent, DashMachine, DashState};
pub use input::{AxisDirection, InputSnapshot, ZERO_THRESHOLD};
pub use params::{DashParams, MovementParams, WallJumpForce};
pub use resources::MovementInput;
pub use sensors::ContactSensors;
pub use state::{Facing, MotionPhase, MotionState};
pub use timers::{TimerBank, TimerKind};

use bevy::prelude::*;

use crate::movement::bootstrap::{spawn_player, spawn_test_room};
use crate::movement::systems::{detect_contacts, drive_motion, mirror_facing, read_input};

/// Ordering of the fixed-rate motion pipeline: contacts first, then the controller.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSet {
    Sensors,
    Drive,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .configure_sets(FixedUpdate, (MotionSet::Sensors, MotionSet::Drive).chain())
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(Update, (read_input, mirror_facing))
            .add_systems(FixedUpdate, detect_contacts.in_set(MotionSet::Sensors))
            .add_systems(FixedUpdate, drive_motion.in_set(MotionSet::Drive));
    }
}
