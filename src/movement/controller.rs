//! Movement domain: the per-actor motion state machine.
//!
//! [`MotionController::tick`] is a pure function of its own state plus the
//! tick's parameters, input, contacts, velocity and `dt`. It never touches the
//! ECS or the physics engine; the systems in `movement::systems` feed it and
//! apply the [`MotionCommands`] it returns.

use bevy::prelude::*;

use crate::movement::commands::{GravityBranch, Impulse, ImpulseKind, MotionCommands};
use crate::movement::dash::{DashEvent, DashMachine};
use crate::movement::input::{InputSnapshot, ZERO_THRESHOLD};
use crate::movement::params::{DashParams, MovementParams};
use crate::movement::sensors::ContactSensors;
use crate::movement::state::{Facing, MotionPhase, MotionState};
use crate::movement::timers::{TimerBank, TimerKind};

/// Horizontal direction of a wall jump: away from the wall that was jumped off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallJumpDirection {
    Left,
    Right,
}

impl WallJumpDirection {
    pub fn opposite(self) -> Self {
        match self {
            WallJumpDirection::Left => WallJumpDirection::Right,
            WallJumpDirection::Right => WallJumpDirection::Left,
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            WallJumpDirection::Left => -1.0,
            WallJumpDirection::Right => 1.0,
        }
    }
}

/// Pick the gravity branch for this tick. Evaluated in priority order, the
/// final branch catches everything else.
pub fn select_gravity(
    state: &MotionState,
    input: &InputSnapshot,
    velocity_y: f32,
    params: &MovementParams,
) -> GravityBranch {
    let falling = velocity_y < -ZERO_THRESHOLD;

    if falling && input.is_holding_down() {
        GravityBranch::FastFall
    } else if state.is_jump_cut {
        GravityBranch::JumpCut
    } else if state.in_jump_arc() && velocity_y.abs() < params.jump_hang_time_threshold {
        GravityBranch::ApexHang
    } else if falling {
        GravityBranch::Falling
    } else {
        GravityBranch::Base
    }
}

#[derive(Component, Debug, Clone)]
pub struct MotionController {
    timers: TimerBank,
    state: MotionState,
    dash: DashMachine,
    default_gravity_scale: f32,
    gravity_scale: f32,
    /// Seconds left in the current wall-jump window. Counts down like the timer bank.
    wall_jump_remaining: f32,
    last_wall_jump: Option<WallJumpDirection>,
    phase: MotionPhase,
}

impl MotionController {
    /// `default_gravity_scale` is read once from the body at spawn.
    pub fn new(default_gravity_scale: f32) -> Self {
        Self {
            timers: TimerBank::default(),
            state: MotionState::default(),
            dash: DashMachine::default(),
            default_gravity_scale,
            gravity_scale: default_gravity_scale,
            wall_jump_remaining: 0.0,
            last_wall_jump: None,
            phase: MotionPhase::default(),
        }
    }

    pub fn timers(&self) -> &TimerBank {
        &self.timers
    }

    /// Direct access for harnesses that inject synthetic timer values.
    pub fn timers_mut(&mut self) -> &mut TimerBank {
        &mut self.timers
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Direct access for harnesses that inject synthetic flags.
    pub fn state_mut(&mut self) -> &mut MotionState {
        &mut self.state
    }

    pub fn dash(&self) -> &DashMachine {
        &self.dash
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    pub fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    pub fn default_gravity_scale(&self) -> f32 {
        self.default_gravity_scale
    }

    pub fn last_wall_jump(&self) -> Option<WallJumpDirection> {
        self.last_wall_jump
    }

    pub fn can_jump(&self) -> bool {
        self.timers.is_active(TimerKind::GroundedGrace) && !self.state.is_jumping
    }

    pub fn can_wall_jump(&self) -> bool {
        let t = &self.timers;
        // Until the actor lands again, only the wall opposite the last wall jump re-arms it.
        let direction_ok = match self.last_wall_jump {
            Some(WallJumpDirection::Right) => t.is_active(TimerKind::WallGraceRight),
            Some(WallJumpDirection::Left) => t.is_active(TimerKind::WallGraceLeft),
            None => true,
        };

        t.is_active(TimerKind::JumpBuffer)
            && t.last_on_wall() > 0.0
            && !t.is_active(TimerKind::GroundedGrace)
            && direction_ok
    }

    /// Run one fixed simulation step.
    pub fn tick(
        &mut self,
        params: &MovementParams,
        dash: &DashParams,
        input: &InputSnapshot,
        sensors: &ContactSensors,
        velocity: Vec2,
        dt: f32,
    ) -> MotionCommands {
        let dt = dt.max(0.0);
        let mut velocity = velocity;
        let mut commands = MotionCommands::default();

        self.update_timers(params, input, sensors, dt);
        self.advance_dash(dt, dash);

        self.resolve_jump_state(sensors, velocity.y);
        self.recover_on_ground();

        if !self.dash.is_dashing() {
            self.trigger_jumps(params, &mut velocity, &mut commands);
        }
        self.apply_jump_cut(params, input, &mut velocity, &mut commands);

        if input.dash_pressed {
            self.try_dash(dash, &mut velocity, &mut commands);
        }

        if self.dash.is_dashing() {
            self.gravity_scale = 0.0;
            commands.gravity_branch = GravityBranch::Dash;
        } else {
            self.apply_gravity(params, input, &mut velocity, &mut commands);
            commands.facing_flipped = self.turn(input);
            commands.force = self.run_force(params, input, velocity);
            self.apply_friction(params, input, sensors, &mut velocity, &mut commands);
        }

        commands.gravity_scale = self.gravity_scale;
        commands.phase = self.update_phase(params, velocity.y);
        commands
    }

    fn update_timers(
        &mut self,
        params: &MovementParams,
        input: &InputSnapshot,
        sensors: &ContactSensors,
        dt: f32,
    ) {
        self.timers.tick(dt);
        if self.state.is_wall_jumping {
            self.wall_jump_remaining -= dt;
        }

        if input.jump_pressed {
            self.timers
                .refresh(TimerKind::JumpBuffer, params.jump_buffer_time);
        }
        if sensors.grounded {
            self.timers
                .refresh(TimerKind::GroundedGrace, params.coyote_time);
            self.last_wall_jump = None;
        }
        if sensors.wall_left {
            self.timers
                .refresh(TimerKind::WallGraceLeft, params.coyote_time);
        }
        if sensors.wall_right {
            self.timers
                .refresh(TimerKind::WallGraceRight, params.coyote_time);
        }
    }

    fn advance_dash(&mut self, dt: f32, dash: &DashParams) {
        match self.dash.advance(dt, dash) {
            Some(DashEvent::Ended {
                restore_gravity_scale,
            }) => {
                self.gravity_scale = restore_gravity_scale;
                debug!("Dash ended: gravity_scale={}", restore_gravity_scale);
            }
            Some(DashEvent::Rearmed) => debug!("Dash ready"),
            None => {}
        }
    }

    fn resolve_jump_state(&mut self, sensors: &ContactSensors, velocity_y: f32) {
        if self.state.is_jumping && velocity_y < -ZERO_THRESHOLD {
            self.state.is_jumping = false;
            if !self.state.is_wall_jumping {
                self.state.is_jump_falling = true;
            }
        } else if self.state.is_jumping && sensors.grounded && velocity_y <= ZERO_THRESHOLD {
            // Landed on something before the arc turned downward.
            self.state.is_jumping = false;
        }

        if self.state.is_wall_jumping && self.wall_jump_remaining < 0.0 {
            self.state.is_wall_jumping = false;
        }
    }

    fn recover_on_ground(&mut self) {
        if self.can_jump() && !self.state.is_wall_jumping {
            self.state.is_jump_cut = false;
            if !self.state.is_jumping {
                self.state.is_jump_falling = false;
            }
        }
    }

    fn trigger_jumps(
        &mut self,
        params: &MovementParams,
        velocity: &mut Vec2,
        commands: &mut MotionCommands,
    ) {
        let buffered = self.timers.is_active(TimerKind::JumpBuffer);

        if self.can_jump() && buffered {
            self.state.start_jump();
            self.timers.clear(TimerKind::JumpBuffer);
            self.timers.clear(TimerKind::GroundedGrace);

            let mut force = params.jump_force;
            if velocity.y < 0.0 {
                force -= velocity.y;
            }
            let delta = Vec2::new(0.0, force);
            *velocity += delta;
            commands.impulses.push(Impulse {
                kind: ImpulseKind::Jump,
                delta,
            });
            debug!("Jump: impulse={}", force);
        } else if self.can_wall_jump() {
            // Jump away from the active wall; the right wall wins when both are in grace.
            let direction = match self.last_wall_jump {
                Some(last) => last.opposite(),
                None if self.timers.is_active(TimerKind::WallGraceRight) => {
                    WallJumpDirection::Left
                }
                None => WallJumpDirection::Right,
            };

            self.state.start_wall_jump();
            self.wall_jump_remaining = params.wall_jump_time;
            self.last_wall_jump = Some(direction);
            for kind in TimerKind::ALL {
                self.timers.clear(kind);
            }

            let mut force = params.wall_jump_force.as_vec2();
            force.x *= direction.sign();
            if velocity.x.signum() != force.x.signum() {
                force.x -= velocity.x;
            }
            if velocity.y < 0.0 {
                force.y -= velocity.y;
            }
            *velocity += force;
            commands.impulses.push(Impulse {
                kind: ImpulseKind::WallJump,
                delta: force,
            });
            debug!("Wall jump: direction={:?}, impulse={:?}", direction, force);
        }
    }

    fn apply_jump_cut(
        &mut self,
        params: &MovementParams,
        input: &InputSnapshot,
        velocity: &mut Vec2,
        commands: &mut MotionCommands,
    ) {
        if !input.jump_released || !self.state.is_jumping || velocity.y <= ZERO_THRESHOLD {
            return;
        }
        if self.state.is_jump_cut {
            return;
        }

        self.state.is_jump_cut = true;
        if params.jump_cut_velocity_mult < 1.0 {
            let delta = Vec2::new(0.0, velocity.y * (params.jump_cut_velocity_mult - 1.0));
            *velocity += delta;
            commands.impulses.push(Impulse {
                kind: ImpulseKind::JumpCut,
                delta,
            });
        }
        debug!("Jump cut at vy={}", velocity.y);
    }

    fn try_dash(&mut self, dash: &DashParams, velocity: &mut Vec2, commands: &mut MotionCommands) {
        if !self.dash.try_start(self.gravity_scale) {
            debug!("Dash rejected: {:?}", self.dash.state());
            return;
        }

        let target = Vec2::new(self.state.facing.sign() * dash.power, 0.0);
        let delta = target - *velocity;
        *velocity = target;
        commands.impulses.push(Impulse {
            kind: ImpulseKind::DashLaunch,
            delta,
        });
        debug!("Dash started: facing={:?}", self.state.facing);
    }

    fn apply_gravity(
        &mut self,
        params: &MovementParams,
        input: &InputSnapshot,
        velocity: &mut Vec2,
        commands: &mut MotionCommands,
    ) {
        let branch = select_gravity(&self.state, input, velocity.y, params);
        let (multiplier, min_velocity_y) = match branch {
            GravityBranch::FastFall => (
                params.fast_fall_gravity_multiplier,
                Some(-params.max_fast_fall_speed),
            ),
            GravityBranch::JumpCut => (
                params.jump_cut_gravity_multiplier,
                Some(-params.max_fall_speed),
            ),
            GravityBranch::ApexHang => (params.jump_hang_time_multiplier, None),
            GravityBranch::Falling => (
                params.fall_gravity_multiplier,
                Some(-params.max_fall_speed),
            ),
            GravityBranch::Base | GravityBranch::Dash => (1.0, None),
        };

        self.gravity_scale = self.default_gravity_scale * multiplier;
        if let Some(min_y) = min_velocity_y {
            velocity.y = velocity.y.max(min_y);
        }
        commands.gravity_branch = branch;
        commands.min_velocity_y = min_velocity_y;
    }

    /// Flip facing when input points the other way. Returns whether it flipped.
    fn turn(&mut self, input: &InputSnapshot) -> bool {
        if self
            .state
            .facing
            .disagrees_with(input.horizontal_direction())
        {
            self.state.facing = self.state.facing.flipped();
            true
        } else {
            false
        }
    }

    fn at_apex(&self, params: &MovementParams, velocity_y: f32) -> bool {
        self.state.in_jump_arc() && velocity_y.abs() < params.jump_hang_time_threshold
    }

    fn run_force(&self, params: &MovementParams, input: &InputSnapshot, velocity: Vec2) -> Vec2 {
        let lerp = if self.state.is_wall_jumping {
            params.wall_jump_run_lerp
        } else {
            1.0
        };

        let mut target_speed = input.horizontal * params.move_speed;
        target_speed = velocity.x + (target_speed - velocity.x) * lerp.clamp(0.0, 1.0);

        let grounded = self.timers.is_active(TimerKind::GroundedGrace);
        let accelerating = target_speed.abs() > ZERO_THRESHOLD;
        let mut accel_rate = match (grounded, accelerating) {
            (true, true) => params.run_accel,
            (true, false) => params.run_decel,
            (false, true) => params.run_accel * params.accel_in_air,
            (false, false) => params.run_decel * params.decel_in_air,
        };

        if self.at_apex(params, velocity.y) {
            accel_rate *= params.jump_hang_time_multiplier;
            target_speed *= params.jump_hang_max_speed_mult;
        }

        // Keep aerial momentum instead of braking toward a slower target.
        let same_direction =
            velocity.x.signum() == target_speed.signum() && target_speed.abs() > ZERO_THRESHOLD;
        if !grounded && velocity.x.abs() > target_speed.abs() && same_direction {
            accel_rate = 0.0;
        }

        let speed_diff = target_speed - velocity.x;
        let magnitude = (speed_diff.abs() * accel_rate).powf(params.vel_power);
        Vec2::new(magnitude.copysign(speed_diff), 0.0)
    }

    fn apply_friction(
        &mut self,
        params: &MovementParams,
        input: &InputSnapshot,
        sensors: &ContactSensors,
        velocity: &mut Vec2,
        commands: &mut MotionCommands,
    ) {
        if !sensors.grounded || !input.is_horizontal_neutral() {
            return;
        }

        let amount = velocity.x.abs().min(params.friction_amount.abs());
        if amount <= 0.0 {
            return;
        }
        let delta = Vec2::new(-amount.copysign(velocity.x), 0.0);
        *velocity += delta;
        commands.impulses.push(Impulse {
            kind: ImpulseKind::Friction,
            delta,
        });
    }

    fn update_phase(&mut self, params: &MovementParams, velocity_y: f32) -> MotionPhase {
        let phase = MotionPhase::classify(
            &self.state,
            velocity_y,
            self.timers.is_active(TimerKind::GroundedGrace),
            params.jump_hang_time_threshold,
            self.dash.is_dashing(),
        );
        if phase != self.phase {
            debug!("Motion phase: {} -> {}", self.phase.label(), phase.label());
            self.phase = phase;
        }
        phase
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(1.0)
    }
}
