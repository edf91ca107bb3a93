//! Hardware seams between the controller and the board.
//!
//! The firmware binds these to nRF52840 GPIO/SAADC, the embassy-usb HID
//! writers and defmt; host tests bind them to fakes. Timing goes through
//! [`embedded_hal_async::delay::DelayNs`].

use crate::error::Error;
use crate::hid::keyboard::KeyboardReport;
use crate::hid::mouse::MouseReport;
use crate::input::{AnalogSample, Button, Level};

/// Digital and analog inputs of the panel.
#[allow(async_fn_in_trait)]
pub trait InputPort {
    /// Instantaneous level of a button pin.
    fn read_button(&mut self, button: Button) -> Result<Level, Error>;

    /// Convert every analog channel once.
    async fn read_analog(&mut self) -> Result<AnalogSample, Error>;
}

/// Virtual USB keyboard + mouse.
///
/// Writes are fire-and-forget: success only means the report was queued
/// on the endpoint, not that the host applied it.
#[allow(async_fn_in_trait)]
pub trait HidOutputPort {
    async fn write_keyboard(&mut self, report: &KeyboardReport) -> Result<(), Error>;

    async fn write_mouse(&mut self, report: &MouseReport) -> Result<(), Error>;
}

/// Line-oriented operator output.
pub trait DiagnosticPort {
    /// Free-form startup line.
    fn banner(&mut self, message: &str);

    /// Control mode was toggled.
    fn mode_changed(&mut self, active: bool);
}
