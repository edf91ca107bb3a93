//! Stateful press/release/move front end over a [`HidOutputPort`].
//!
//! Tracks which keys and mouse buttons are held so that every report
//! carries the full held state. Pressing something already held, or
//! releasing something that is not, sends nothing.
//!
//! The held state only changes once the report carrying it was written,
//! so a failed write leaves the emitter in step with the host and the
//! same call can simply be retried.

use super::keyboard::{Key, KeyboardReport};
use super::mouse::{MouseButton, MouseReport};
use crate::error::Error;
use crate::ports::HidOutputPort;

pub struct HidEmitter<O> {
    output: O,
    keyboard: KeyboardReport,
    buttons: u8,
}

impl<O: HidOutputPort> HidEmitter<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            keyboard: KeyboardReport::empty(),
            buttons: 0,
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Keys currently held.
    pub fn keyboard(&self) -> &KeyboardReport {
        &self.keyboard
    }

    /// Mouse button bitfield currently held.
    pub fn buttons(&self) -> u8 {
        self.buttons
    }

    pub async fn press_key(&mut self, key: Key) -> Result<(), Error> {
        let mut next = self.keyboard;
        if next.press(key) {
            self.set_keyboard(next).await?;
        }
        Ok(())
    }

    pub async fn release_key(&mut self, key: Key) -> Result<(), Error> {
        let mut next = self.keyboard;
        if next.release(key) {
            self.set_keyboard(next).await?;
        }
        Ok(())
    }

    /// Release every held key. Mouse buttons are left alone.
    pub async fn release_all(&mut self) -> Result<(), Error> {
        let mut next = self.keyboard;
        if next.clear() {
            self.set_keyboard(next).await?;
        }
        Ok(())
    }

    /// Tap a key: press and release.
    pub async fn write_key(&mut self, key: Key) -> Result<(), Error> {
        self.press_key(key).await?;
        self.release_key(key).await
    }

    pub async fn press_button(&mut self, button: MouseButton) -> Result<(), Error> {
        self.set_buttons(self.buttons | button.mask()).await
    }

    pub async fn release_button(&mut self, button: MouseButton) -> Result<(), Error> {
        self.set_buttons(self.buttons & !button.mask()).await
    }

    /// Relative pointer and wheel motion, carrying the held buttons.
    pub async fn move_by(&mut self, x: i8, y: i8, wheel: i8) -> Result<(), Error> {
        let report = MouseReport {
            buttons: self.buttons,
            x,
            y,
            wheel,
        };
        self.output.write_mouse(&report).await
    }

    async fn set_buttons(&mut self, buttons: u8) -> Result<(), Error> {
        if buttons == self.buttons {
            return Ok(());
        }
        let report = MouseReport {
            buttons,
            ..MouseReport::empty()
        };
        self.output.write_mouse(&report).await?;
        self.buttons = buttons;
        Ok(())
    }

    async fn set_keyboard(&mut self, report: KeyboardReport) -> Result<(), Error> {
        self.output.write_keyboard(&report).await?;
        self.keyboard = report;
        Ok(())
    }
}
