//! Control mode - whether HID output is enabled.
//!
//! Toggled on the press edge of the on/off switch only; releases and
//! steady levels never change the mode, and nothing times it out.

use crate::input::{Button, Level};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Inactive,
    Active,
}

impl Mode {
    pub fn is_active(self) -> bool {
        self == Mode::Active
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Inactive => Mode::Active,
            Mode::Active => Mode::Inactive,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Inactive,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_active()
    }

    /// Feed the switch's previous and current debounced levels.
    ///
    /// Returns the new mode when this sample is a press edge.
    pub fn update(&mut self, previous: Level, current: Level) -> Option<Mode> {
        if current == previous || !Button::SwitchOnOff.is_pressed(current) {
            return None;
        }
        self.mode = self.mode.toggled();
        Some(self.mode)
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}
