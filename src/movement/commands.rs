//! Movement domain: commands handed to the physics collaborator after each tick.

use bevy::prelude::*;

use crate::movement::state::MotionPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpulseKind {
    Jump,
    WallJump,
    DashLaunch,
    Friction,
    JumpCut,
}

/// Instantaneous change in velocity. Mass independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    pub kind: ImpulseKind,
    pub delta: Vec2,
}

/// Branch taken by gravity-scale selection. Exactly one applies per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityBranch {
    FastFall,
    JumpCut,
    ApexHang,
    Falling,
    #[default]
    Base,
    /// Gravity suspended by an active dash.
    Dash,
}

/// Everything the physics side must apply for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionCommands {
    pub gravity_scale: f32,
    pub gravity_branch: GravityBranch,
    /// Continuous acceleration for this tick; the adapter multiplies by mass.
    pub force: Vec2,
    pub impulses: Vec<Impulse>,
    /// Lower bound for vertical velocity (fall-speed cap), if any.
    pub min_velocity_y: Option<f32>,
    pub facing_flipped: bool,
    pub phase: MotionPhase,
}

impl MotionCommands {
    pub fn impulse(&self, kind: ImpulseKind) -> Option<Impulse> {
        self.impulses.iter().copied().find(|i| i.kind == kind)
    }

    pub fn has_impulse(&self, kind: ImpulseKind) -> bool {
        self.impulse(kind).is_some()
    }

    /// Sum of all impulse deltas.
    pub fn total_impulse(&self) -> Vec2 {
        self.impulses.iter().map(|i| i.delta).sum()
    }
}
