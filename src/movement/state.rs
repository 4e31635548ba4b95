//! Movement domain: motion flags, facing, and the derived phase classification.

use bevy::prelude::*;

use crate::movement::input::{AxisDirection, ZERO_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Whether horizontal input points away from this facing. Neutral input never disagrees.
    pub fn disagrees_with(self, direction: AxisDirection) -> bool {
        matches!(
            (self, direction),
            (Facing::Right, AxisDirection::Negative) | (Facing::Left, AxisDirection::Positive)
        )
    }
}

/// Jump-related flags owned by one actor's controller.
///
/// `is_jumping` and `is_wall_jumping` are never both set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionState {
    pub is_jumping: bool,
    pub is_wall_jumping: bool,
    pub is_jump_cut: bool,
    pub is_jump_falling: bool,
    pub facing: Facing,
}

impl MotionState {
    /// Any jump-derived airborne arc, the condition for apex hang.
    pub fn in_jump_arc(&self) -> bool {
        self.is_jumping || self.is_wall_jumping || self.is_jump_falling
    }

    pub fn start_jump(&mut self) {
        self.is_jumping = true;
        self.is_wall_jumping = false;
        self.is_jump_cut = false;
        self.is_jump_falling = false;
    }

    pub fn start_wall_jump(&mut self) {
        self.is_wall_jumping = true;
        self.is_jumping = false;
        self.is_jump_cut = false;
        self.is_jump_falling = false;
    }
}

/// Human-readable classification of the flags plus vertical velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPhase {
    #[default]
    Grounded,
    Rising,
    ApexHang,
    Falling,
    JumpCut,
    WallJumping,
    Dashing,
}

impl MotionPhase {
    pub fn classify(
        state: &MotionState,
        velocity_y: f32,
        grounded: bool,
        hang_threshold: f32,
        dashing: bool,
    ) -> Self {
        if dashing {
            MotionPhase::Dashing
        } else if state.is_wall_jumping {
            MotionPhase::WallJumping
        } else if state.is_jump_cut {
            MotionPhase::JumpCut
        } else if state.in_jump_arc() && velocity_y.abs() < hang_threshold {
            MotionPhase::ApexHang
        } else if grounded && !state.is_jumping {
            MotionPhase::Grounded
        } else if velocity_y < -ZERO_THRESHOLD {
            MotionPhase::Falling
        } else {
            MotionPhase::Rising
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MotionPhase::Grounded => "grounded",
            MotionPhase::Rising => "rising",
            MotionPhase::ApexHang => "apex-hang",
            MotionPhase::Falling => "falling",
            MotionPhase::JumpCut => "jump-cut",
            MotionPhase::WallJumping => "wall-jumping",
            MotionPhase::Dashing => "dashing",
        }
    }
}
