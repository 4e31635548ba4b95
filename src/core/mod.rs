//! Core domain: camera, fixed simulation rate and world gravity.

mod systems;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Rate of the fixed-timestep channel that owns all motion decisions.
pub const SIMULATION_HZ: f64 = 60.0;

/// Downward acceleration at gravity scale 1.0, in px/s².
pub const BASE_GRAVITY: f32 = 1800.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .insert_resource(Gravity(Vec2::NEG_Y * BASE_GRAVITY))
            .add_systems(Startup, setup_camera);
    }
}
