//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, analog conditioning parameters, timing and
//! recenter tuning live here so they can be tuned in one place.

use crate::input::{AxisConfig, Level};
use crate::recenter::RecenterConfig;

// Analog conditioning

/// Full-scale raw reading of the analog inputs (SAADC at 10-bit resolution).
pub const ADC_MAX: u16 = 1023;

/// Zoom joystick: mapped into 0..=8, resting at 4, dead zone of 2.
pub const ZOOM_AXIS: AxisConfig = AxisConfig::from_range(8);

/// Incline joystick: mapped into 0..=8, resting at 4, dead zone of 2.
pub const INCLINE_AXIS: AxisConfig = AxisConfig::from_range(8);

// Motion

/// Pointer step emitted per cycle while a directional button is held.
pub const STEP_MOVE: i8 = 4;

// Timing

/// Settle time before re-reading a button whose level changed (ms).
pub const DEBOUNCE_SETTLE_MS: u32 = 5;

/// Pacing delay at the end of every polling cycle (ms).
pub const RESPONSE_DELAY_MS: u32 = 5;

/// Delay after pin setup before the HID device takes over (ms).
pub const STARTUP_SETTLE_MS: u32 = 1000;

// Recenter

/// Full-scale moves per phase needed to bring the pointer back to the
/// middle of the screen. Tuned for one display/resolution pair; retune
/// when the host screen or pointer speed changes.
pub const RECENTER: RecenterConfig = RecenterConfig {
    left: 11,
    up: 7,
    right: 5,
    down: 3,
};

// Buttons

/// The on/off switch pulls its line high and shorts to ground when pressed.
pub const SWITCH_ACTIVE_LEVEL: Level = Level::Low;

/// Directional buttons are externally biased low and read high when pressed.
pub const MOVE_ACTIVE_LEVEL: Level = Level::High;

/// Debounced level assumed for every button before the first cycle.
pub const INITIAL_BUTTON_LEVEL: Level = Level::Low;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "joymouse";
pub const USB_PRODUCT: &str = "Joystick Viewport Mouse";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 1;

// GPIO pin assignments (nRF52840-DK numbering)
//
// Actual `embassy_nrf::peripherals::*` pins are picked in `main.rs`.
//
//   Switch ON/OFF   → P0.11  (internal pull-up)
//   Move down       → P0.12
//   Move up         → P0.24
//   Move right      → P0.25
//   Move left       → P1.08
//   Zoom X          → P0.02 / AIN0 (wired, not sampled)
//   Zoom Y          → P0.03 / AIN1
//   Incline X       → P0.04 / AIN2
//   Incline Y       → P0.05 / AIN3

/// Tunables consumed by [`crate::controller::Controller`].
///
/// Firmware uses [`ControllerConfig::DEFAULT`]; tests override fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    pub zoom: AxisConfig,
    pub incline: AxisConfig,
    pub step: i8,
    pub debounce_settle_ms: u32,
    pub response_delay_ms: u32,
    pub startup_settle_ms: u32,
    pub recenter: RecenterConfig,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        zoom: ZOOM_AXIS,
        incline: INCLINE_AXIS,
        step: STEP_MOVE,
        debounce_settle_ms: DEBOUNCE_SETTLE_MS,
        response_delay_ms: RESPONSE_DELAY_MS,
        startup_settle_ms: STARTUP_SETTLE_MS,
        recenter: RECENTER,
    };
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
