//! Debug domain: overlay visibility state.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the motion overlay is shown
    pub show_motion: bool,
}
