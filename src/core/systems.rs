//! Core domain: startup systems.

use bevy::prelude::*;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("Fixed simulation rate: {} Hz", super::SIMULATION_HZ);
}
