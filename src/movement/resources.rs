//! Movement domain: input resource shared between frame-rate and fixed-rate systems.

use bevy::prelude::*;

use crate::movement::input::InputSnapshot;

/// Latest sampled input.
///
/// Axes are overwritten every frame. Button edges are latched until the next
/// fixed tick takes them, so a press is never lost when a frame runs zero fixed
/// steps, and never seen twice when it runs several.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
}

impl MovementInput {
    /// Copy the axes and consume the latched edges.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            horizontal: self.axis.x.clamp(-1.0, 1.0),
            vertical: self.axis.y.clamp(-1.0, 1.0),
            jump_pressed: self.jump_pressed,
            jump_released: self.jump_released,
            dash_pressed: self.dash_pressed,
        };
        self.jump_pressed = false;
        self.jump_released = false;
        self.dash_pressed = false;
        snapshot
    }
}
