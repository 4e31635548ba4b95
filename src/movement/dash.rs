//! Movement domain: the dash sub-machine (active window, then cooldown).

use crate::movement::params::DashParams;

/// Exactly one of these holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashState {
    #[default]
    Ready,
    Dashing {
        elapsed: f32,
        /// Gravity scale captured when the dash started.
        restore_gravity_scale: f32,
    },
    Cooldown {
        elapsed: f32,
    },
}

/// Transitions reported by [`DashMachine::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashEvent {
    Ended { restore_gravity_scale: f32 },
    Rearmed,
}

/// Two chained timers evaluated every tick. A dash can't be cancelled or re-entered
/// until both have run out.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashMachine {
    state: DashState,
}

impl DashMachine {
    pub fn state(&self) -> DashState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, DashState::Ready)
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.state, DashState::Dashing { .. })
    }

    pub fn is_cooling_down(&self) -> bool {
        matches!(self.state, DashState::Cooldown { .. })
    }

    /// Enter the dash if ready. Returns false, leaving state untouched, otherwise.
    pub fn try_start(&mut self, current_gravity_scale: f32) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.state = DashState::Dashing {
            elapsed: 0.0,
            restore_gravity_scale: current_gravity_scale,
        };
        true
    }

    /// Advance both timers by `dt`. Time left over when the dash window closes
    /// counts toward the cooldown.
    pub fn advance(&mut self, dt: f32, params: &DashParams) -> Option<DashEvent> {
        match self.state {
            DashState::Ready => None,
            DashState::Dashing {
                elapsed,
                restore_gravity_scale,
            } => {
                let elapsed = elapsed + dt;
                if elapsed >= params.duration {
                    self.state = DashState::Cooldown {
                        elapsed: elapsed - params.duration,
                    };
                    self.settle_cooldown(params);
                    Some(DashEvent::Ended {
                        restore_gravity_scale,
                    })
                } else {
                    self.state = DashState::Dashing {
                        elapsed,
                        restore_gravity_scale,
                    };
                    None
                }
            }
            DashState::Cooldown { elapsed } => {
                self.state = DashState::Cooldown {
                    elapsed: elapsed + dt,
                };
                self.settle_cooldown(params).then_some(DashEvent::Rearmed)
            }
        }
    }

    fn settle_cooldown(&mut self, params: &DashParams) -> bool {
        match self.state {
            DashState::Cooldown { elapsed } if elapsed >= params.cooldown => {
                self.state = DashState::Ready;
                true
            }
            _ => false,
        }
    }
}
