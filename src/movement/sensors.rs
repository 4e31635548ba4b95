//! Movement domain: contact readings supplied by the collision collaborator.

use bevy::prelude::*;

use crate::movement::state::Facing;

/// World-space contact readings for one tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactSensors {
    pub grounded: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl ContactSensors {
    pub fn new(grounded: bool, wall_left: bool, wall_right: bool) -> Self {
        Self {
            grounded,
            wall_left,
            wall_right,
        }
    }

    /// Build readings from check points that turn with the actor.
    ///
    /// The front probe sits on the facing side, so it reports the right wall while
    /// facing right and the left wall while facing left.
    pub fn from_body_relative(grounded: bool, front: bool, back: bool, facing: Facing) -> Self {
        let (wall_left, wall_right) = match facing {
            Facing::Right => (back, front),
            Facing::Left => (front, back),
        };
        Self::new(grounded, wall_left, wall_right)
    }

    pub fn touching_wall(&self) -> bool {
        self.wall_left || self.wall_right
    }
}
