//! Unified error type for joymouse.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for efficient
//! on-target logging.
//!
//! The reference wiring never fails a read or a write; these variants
//! exist for hardware and simulated ports that can.

use crate::input::{AnalogChannel, Button};

/// Top-level error type used across the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Inputs
    /// A digital button pin could not be read.
    PinRead(Button),

    /// The ADC did not produce a sample for the channel.
    AnalogRead(AnalogChannel),

    // USB
    /// A HID report could not be written to the host.
    HidWrite(Interface),
}

/// HID interface a report was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interface {
    Keyboard,
    Mouse,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::PinRead(button) => write!(f, "failed to read button {:?}", button),
            Error::AnalogRead(channel) => write!(f, "failed to sample analog {:?}", channel),
            Error::HidWrite(iface) => write!(f, "failed to write {:?} report", iface),
        }
    }
}
