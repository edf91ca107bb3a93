//! Input conditioning - debounced buttons and dead-zoned joystick axes.
//!
//! ## Components
//!
//! - **Buttons**: 5 digital inputs read through [`ButtonBank`] and
//!   filtered by [`debounce`]
//! - **Axes**: 3 analog channels mapped and dead-zoned by [`AxisConfig`]

pub mod axis;
pub mod debounce;

pub use axis::{map_range, read_axis, AxisConfig};
pub use debounce::{debounce, Level};

use crate::config;
use crate::error::Error;
use embedded_hal::digital::InputPin;

/// Physical buttons on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Toggles HID control on and off.
    SwitchOnOff,
    MoveDown,
    MoveUp,
    MoveRight,
    MoveLeft,
}

impl Button {
    /// All buttons, in pin-bank order.
    pub const ALL: [Button; 5] = [
        Button::SwitchOnOff,
        Button::MoveDown,
        Button::MoveUp,
        Button::MoveRight,
        Button::MoveLeft,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Level the pin reads while the button is held down.
    pub const fn active_level(self) -> Level {
        match self {
            Button::SwitchOnOff => config::SWITCH_ACTIVE_LEVEL,
            _ => config::MOVE_ACTIVE_LEVEL,
        }
    }

    pub fn is_pressed(self, level: Level) -> bool {
        level == self.active_level()
    }
}

/// Analog joystick channels consumed by the controller.
///
/// The zoom joystick's X axis is wired but never sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogChannel {
    ZoomY,
    InclineX,
    InclineY,
}

impl AnalogChannel {
    pub const ALL: [AnalogChannel; 3] = [
        AnalogChannel::ZoomY,
        AnalogChannel::InclineX,
        AnalogChannel::InclineY,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One conversion of every analog channel, raw values in `0..=ADC_MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogSample([u16; 3]);

impl AnalogSample {
    /// Raw values in [`AnalogChannel::ALL`] order.
    pub const fn new(raw: [u16; 3]) -> Self {
        Self(raw)
    }

    pub fn get(&self, channel: AnalogChannel) -> u16 {
        self.0[channel.index()]
    }
}

/// Debounced level of every button as observed at the end of the
/// previous cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels([Level; 5]);

impl ButtonLevels {
    pub const fn new() -> Self {
        Self([config::INITIAL_BUTTON_LEVEL; 5])
    }

    pub fn get(&self, button: Button) -> Level {
        self.0[button.index()]
    }

    pub fn set(&mut self, button: Button, level: Level) {
        self.0[button.index()] = level;
    }
}

impl Default for ButtonLevels {
    fn default() -> Self {
        Self::new()
    }
}

/// GPIO pins for the five buttons, in [`Button::ALL`] order.
pub struct ButtonBank<P> {
    pins: [P; 5],
}

impl<P: InputPin> ButtonBank<P> {
    pub fn new(pins: [P; 5]) -> Self {
        Self { pins }
    }

    /// Instantaneous (non-debounced) level of a button's pin.
    pub fn level(&mut self, button: Button) -> Result<Level, Error> {
        self.pins[button.index()]
            .is_high()
            .map(Level::from)
            .map_err(|_| Error::PinRead(button))
    }
}
