//! Joystick + button panel to USB HID mouse/keyboard.
//!
//! All controller logic lives here, behind the [`ports`] traits, so it
//! runs on the host as well as on the nRF52840:
//!
//! - [`input`]: debounced buttons, dead-zoned joystick axes
//! - [`mode`]: on/off control mode
//! - [`arbiter`]: one action per cycle, by fixed priority
//! - [`hid`]: keyboard/mouse reports and the stateful emitter
//! - [`recenter`]: open-loop pointer return
//! - [`controller`]: the polling cycle tying it together
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and binds the ports to GPIO, SAADC, embassy-usb and defmt.

#![cfg_attr(not(test), no_std)]

pub mod arbiter;
pub mod config;
pub mod controller;
pub mod error;
pub mod hid;
pub mod input;
pub mod mode;
pub mod ports;
pub mod recenter;

#[cfg(test)]
mod testing;

pub use controller::{Controller, ControllerState};
pub use error::Error;
