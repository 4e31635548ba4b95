//! Movement domain: per-tick input snapshot consumed by the motion controller.

/// Magnitudes below this are treated as zero, both for axes and velocities.
pub const ZERO_THRESHOLD: f32 = 0.01;

/// Sign of an axis after the dead-zone is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisDirection {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl AxisDirection {
    pub fn classify(value: f32) -> Self {
        if value < -ZERO_THRESHOLD {
            AxisDirection::Negative
        } else if value > ZERO_THRESHOLD {
            AxisDirection::Positive
        } else {
            AxisDirection::Neutral
        }
    }
}

/// Axis values and edge-triggered button events for one fixed tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// -1.0 (left) to 1.0 (right).
    pub horizontal: f32,
    /// -1.0 (down) to 1.0 (up).
    pub vertical: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
}

impl InputSnapshot {
    /// Snapshot holding only axis values, no button edges.
    pub fn axes(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: horizontal.clamp(-1.0, 1.0),
            vertical: vertical.clamp(-1.0, 1.0),
            ..Self::default()
        }
    }

    pub fn with_jump_pressed(mut self) -> Self {
        self.jump_pressed = true;
        self
    }

    pub fn with_jump_released(mut self) -> Self {
        self.jump_released = true;
        self
    }

    pub fn with_dash_pressed(mut self) -> Self {
        self.dash_pressed = true;
        self
    }

    pub fn horizontal_direction(&self) -> AxisDirection {
        AxisDirection::classify(self.horizontal)
    }

    pub fn vertical_direction(&self) -> AxisDirection {
        AxisDirection::classify(self.vertical)
    }

    pub fn is_holding_down(&self) -> bool {
        self.vertical_direction() == AxisDirection::Negative
    }

    pub fn is_horizontal_neutral(&self) -> bool {
        self.horizontal_direction() == AxisDirection::Neutral
    }
}
