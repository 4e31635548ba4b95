//! Movement domain: tunable parameter sets for each form and the shared dash tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Horizontal and vertical components of the wall-jump launch.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct WallJumpForce {
    pub x: f32,
    pub y: f32,
}

impl WallJumpForce {
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// One form's complete set of movement constants.
///
/// Read-only during a tick. The active set is swapped wholesale when the actor
/// changes form; nothing in the motion core mutates it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct MovementParams {
    // Run
    pub move_speed: f32,
    pub run_accel: f32,
    pub run_decel: f32,
    /// Exponent of the acceleration curve. Must be > 0.
    pub vel_power: f32,
    pub friction_amount: f32,
    pub accel_in_air: f32,
    pub decel_in_air: f32,

    // Jump
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub jump_hang_time_threshold: f32,
    pub jump_hang_time_multiplier: f32,
    /// Not read by the controller; the apex rate scales by `jump_hang_time_multiplier` only.
    pub jump_hang_accel_mult: f32,
    pub jump_hang_max_speed_mult: f32,
    /// Share of upward velocity kept when a jump is cut. 1.0 leaves velocity alone.
    pub jump_cut_velocity_mult: f32,

    // Wall jump
    pub wall_jump_force: WallJumpForce,
    pub wall_jump_time: f32,
    pub wall_jump_run_lerp: f32,

    // Gravity
    pub fall_gravity_multiplier: f32,
    pub fast_fall_gravity_multiplier: f32,
    pub jump_cut_gravity_multiplier: f32,
    pub max_fall_speed: f32,
    pub max_fast_fall_speed: f32,
}

impl MovementParams {
    pub fn human() -> Self {
        Self {
            move_speed: 320.0,
            run_accel: 9.5,
            run_decel: 9.5,
            vel_power: 1.0,
            friction_amount: 24.0,
            accel_in_air: 0.65,
            decel_in_air: 0.65,
            jump_force: 680.0,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
            jump_hang_time_threshold: 60.0,
            jump_hang_time_multiplier: 0.5,
            jump_hang_accel_mult: 1.0,
            jump_hang_max_speed_mult: 1.1,
            jump_cut_velocity_mult: 1.0,
            wall_jump_force: WallJumpForce { x: 400.0, y: 600.0 },
            wall_jump_time: 0.2,
            wall_jump_run_lerp: 0.5,
            fall_gravity_multiplier: 1.6,
            fast_fall_gravity_multiplier: 2.2,
            jump_cut_gravity_multiplier: 2.0,
            max_fall_speed: 900.0,
            max_fast_fall_speed: 1200.0,
        }
    }

    /// Quicker and lower to the ground than the human form.
    pub fn fox() -> Self {
        Self {
            move_speed: 420.0,
            run_accel: 12.0,
            run_decel: 12.0,
            vel_power: 1.0,
            friction_amount: 30.0,
            accel_in_air: 0.75,
            decel_in_air: 0.75,
            jump_force: 560.0,
            coyote_time: 0.1,
            jump_buffer_time: 0.12,
            jump_hang_time_threshold: 50.0,
            jump_hang_time_multiplier: 0.6,
            jump_hang_accel_mult: 1.0,
            jump_hang_max_speed_mult: 1.2,
            jump_cut_velocity_mult: 0.5,
            wall_jump_force: WallJumpForce { x: 460.0, y: 520.0 },
            wall_jump_time: 0.18,
            wall_jump_run_lerp: 0.6,
            fall_gravity_multiplier: 1.8,
            fast_fall_gravity_multiplier: 2.5,
            jump_cut_gravity_multiplier: 2.4,
            max_fall_speed: 1000.0,
            max_fast_fall_speed: 1400.0,
        }
    }

    /// Named non-negative fields, used by configuration validation.
    pub fn non_negative_fields(&self) -> [(&'static str, f32); 18] {
        [
            ("move_speed", self.move_speed),
            ("run_accel", self.run_accel),
            ("run_decel", self.run_decel),
            ("friction_amount", self.friction_amount),
            ("accel_in_air", self.accel_in_air),
            ("decel_in_air", self.decel_in_air),
            ("jump_force", self.jump_force),
            ("coyote_time", self.coyote_time),
            ("jump_buffer_time", self.jump_buffer_time),
            ("jump_hang_time_threshold", self.jump_hang_time_threshold),
            ("jump_hang_time_multiplier", self.jump_hang_time_multiplier),
            ("jump_hang_accel_mult", self.jump_hang_accel_mult),
            ("jump_hang_max_speed_mult", self.jump_hang_max_speed_mult),
            ("jump_cut_velocity_mult", self.jump_cut_velocity_mult),
            ("wall_jump_time", self.wall_jump_time),
            ("wall_jump_run_lerp", self.wall_jump_run_lerp),
            ("max_fall_speed", self.max_fall_speed),
            ("max_fast_fall_speed", self.max_fast_fall_speed),
        ]
    }

    /// Gravity multipliers may sit on either side of 1.0 but never below zero.
    pub fn gravity_multipliers(&self) -> [(&'static str, f32); 3] {
        [
            ("fall_gravity_multiplier", self.fall_gravity_multiplier),
            (
                "fast_fall_gravity_multiplier",
                self.fast_fall_gravity_multiplier,
            ),
            (
                "jump_cut_gravity_multiplier",
                self.jump_cut_gravity_multiplier,
            ),
        ]
    }
}

impl Default for MovementParams {
    fn default() -> Self {
        Self::human()
    }
}

/// Dash tuning. Belongs to the actor, not to a form.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct DashParams {
    /// Horizontal launch speed.
    pub power: f32,
    /// Seconds the dash owns the actor's velocity.
    pub duration: f32,
    /// Seconds after the dash ends before another can start.
    pub cooldown: f32,
}

impl Default for DashParams {
    fn default() -> Self {
        Self {
            power: 900.0,
            duration: 0.16,
            cooldown: 0.35,
        }
    }
}
