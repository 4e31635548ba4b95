//! Platformer character motion: a fixed-step state machine that turns input
//! and contact readings into forces, impulses and gravity scales, plus the
//! bevy/avian2d plugins that host it.

pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod forms;
pub mod movement;
