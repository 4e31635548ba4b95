//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Half extents of the actor's box, used to place the contact probes.
#[derive(Component, Debug, Clone, Copy)]
pub struct ProbeExtents {
    pub half_size: Vec2,
    /// How far past the collider edge a probe reaches.
    pub reach: f32,
}

impl Default for ProbeExtents {
    fn default() -> Self {
        Self {
            half_size: Vec2::new(12.0, 24.0),
            reach: 4.0,
        }
    }
}
