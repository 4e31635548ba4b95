//! Movement domain: recency countdowns for grounding, jump input and wall contact.

/// The countdowns tracked per actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Coyote window after last touching the ground.
    GroundedGrace,
    /// Window during which a jump press is still honoured.
    JumpBuffer,
    WallGraceLeft,
    WallGraceRight,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::GroundedGrace,
        TimerKind::JumpBuffer,
        TimerKind::WallGraceLeft,
        TimerKind::WallGraceRight,
    ];

    fn index(self) -> usize {
        match self {
            TimerKind::GroundedGrace => 0,
            TimerKind::JumpBuffer => 1,
            TimerKind::WallGraceLeft => 2,
            TimerKind::WallGraceRight => 3,
        }
    }
}

/// Seconds remaining in each recency window.
///
/// Values only go down, except through [`TimerBank::refresh`]. They are allowed
/// to go negative; anything at or below zero reads as expired.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimerBank {
    values: [f32; 4],
}

impl TimerBank {
    pub fn tick(&mut self, dt: f32) {
        for value in &mut self.values {
            *value -= dt;
        }
    }

    pub fn refresh(&mut self, kind: TimerKind, duration: f32) {
        self.values[kind.index()] = duration;
    }

    /// Close the window immediately.
    pub fn clear(&mut self, kind: TimerKind) {
        self.refresh(kind, 0.0);
    }

    pub fn value(&self, kind: TimerKind) -> f32 {
        self.values[kind.index()]
    }

    pub fn is_active(&self, kind: TimerKind) -> bool {
        self.value(kind) > 0.0
    }

    /// Most recent wall contact on either side.
    pub fn last_on_wall(&self) -> f32 {
        self.value(TimerKind::WallGraceLeft)
            .max(self.value(TimerKind::WallGraceRight))
    }
}
