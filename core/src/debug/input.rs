//! Menu navigation input

use crate::config::InputConfig;

/// One frame of debug menu input.
///
/// Axis values are already discretised: `-1.0`, `0.0` or `1.0` per frame,
/// typically produced by [`AxisRepeat`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DebugInput {
    /// Show or hide the menu
    pub toggle_menu: bool,
    /// Bring the next panel to the foreground
    pub next_panel: bool,
    /// Bring the previous panel to the foreground
    pub previous_panel: bool,
    /// Step the selected item (positive increments)
    pub horizontal: f32,
    /// Move the selection (positive moves up)
    pub vertical: f32,
    /// Re-validate the selected item
    pub validate: bool,
}

impl DebugInput {
    /// True when the frame carries no input at all
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Turns a held analog axis into discrete steps.
///
/// Crossing the dead zone emits one step immediately; holding the axis
/// emits another step every `repeat_delay` seconds.
#[derive(Debug, Clone, Copy)]
pub struct AxisRepeat {
    dead_zone: f32,
    repeat_delay: f32,
    held: f32,
    timer: f32,
}

impl AxisRepeat {
    pub fn new(dead_zone: f32, repeat_delay: f32) -> Self {
        Self {
            dead_zone: dead_zone.clamp(0.0, 0.99),
            repeat_delay: if repeat_delay > 0.0 { repeat_delay } else { 0.2 },
            held: 0.0,
            timer: 0.0,
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::new(config.axis_dead_zone, config.repeat_delay)
    }

    /// Feed the raw axis value for a frame lasting `dt` seconds.
    ///
    /// Returns the step to apply this frame: `-1.0`, `0.0` or `1.0`.
    pub fn update(&mut self, raw: f32, dt: f32) -> f32 {
        let direction = if raw.is_nan() || raw.abs() < self.dead_zone {
            0.0
        } else {
            raw.signum()
        };

        if direction == 0.0 {
            self.reset();
            return 0.0;
        }

        if direction != self.held {
            self.held = direction;
            self.timer = self.repeat_delay;
            return direction;
        }

        self.timer -= dt.max(0.0);
        if self.timer <= 0.0 {
            // At most one step per frame, even after a long hitch
            self.timer = self.repeat_delay;
            direction
        } else {
            0.0
        }
    }

    /// Forget the held direction
    pub fn reset(&mut self) {
        self.held = 0.0;
        self.timer = 0.0;
    }
}
