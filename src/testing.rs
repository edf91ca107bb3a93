//! Host-side port fakes shared by the unit tests.

use crate::error::{Error, Interface};
use crate::hid::{HidReport, KeyboardReport, MouseReport};
use crate::input::{AnalogChannel, AnalogSample, Button, Level};
use crate::ports::{DiagnosticPort, HidOutputPort, InputPort};
use embedded_hal_async::delay::DelayNs;
use std::collections::VecDeque;

/// Buttons hold a steady level unless a script of one-shot readings is
/// queued; analog channels hold a steady raw value.
pub struct FakeInput {
    levels: [Level; 5],
    scripts: [VecDeque<Level>; 5],
    failing_buttons: [bool; 5],
    analog: [u16; 3],
    failing_analog: [bool; 3],
    pub button_reads: usize,
    pub analog_reads: usize,
}

impl FakeInput {
    pub fn new() -> Self {
        Self {
            levels: [Level::Low; 5],
            scripts: Default::default(),
            failing_buttons: [false; 5],
            analog: [512; 3],
            failing_analog: [false; 3],
            button_reads: 0,
            analog_reads: 0,
        }
    }

    pub fn set_button(&mut self, button: Button, level: Level) {
        self.levels[button.index()] = level;
    }

    /// Queue readings returned before falling back to the steady level.
    pub fn script_button(&mut self, button: Button, readings: &[Level]) {
        self.scripts[button.index()].extend(readings.iter().copied());
    }

    pub fn fail_button(&mut self, button: Button) {
        self.failing_buttons[button.index()] = true;
    }

    pub fn set_analog(&mut self, channel: AnalogChannel, raw: u16) {
        self.analog[channel.index()] = raw;
    }

    pub fn fail_analog(&mut self, channel: AnalogChannel) {
        self.failing_analog[channel.index()] = true;
    }
}

impl InputPort for FakeInput {
    fn read_button(&mut self, button: Button) -> Result<Level, Error> {
        self.button_reads += 1;
        let i = button.index();
        if self.failing_buttons[i] {
            return Err(Error::PinRead(button));
        }
        Ok(self.scripts[i].pop_front().unwrap_or(self.levels[i]))
    }

    async fn read_analog(&mut self) -> Result<AnalogSample, Error> {
        self.analog_reads += 1;
        if let Some(channel) = AnalogChannel::ALL
            .into_iter()
            .find(|channel| self.failing_analog[channel.index()])
        {
            return Err(Error::AnalogRead(channel));
        }
        Ok(AnalogSample::new(self.analog))
    }
}

/// Records every report in write order.
#[derive(Default)]
pub struct RecordingHid {
    pub sent: Vec<HidReport>,
    pub fail_keyboard: bool,
    pub fail_mouse: bool,
}

impl RecordingHid {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HidOutputPort for RecordingHid {
    async fn write_keyboard(&mut self, report: &KeyboardReport) -> Result<(), Error> {
        if self.fail_keyboard {
            return Err(Error::HidWrite(Interface::Keyboard));
        }
        self.sent.push(HidReport::Keyboard(*report));
        Ok(())
    }

    async fn write_mouse(&mut self, report: &MouseReport) -> Result<(), Error> {
        if self.fail_mouse {
            return Err(Error::HidWrite(Interface::Mouse));
        }
        self.sent.push(HidReport::Mouse(*report));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingDiagnostics {
    pub lines: Vec<String>,
    pub modes: Vec<bool>,
}

impl DiagnosticPort for RecordingDiagnostics {
    fn banner(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn mode_changed(&mut self, active: bool) {
        self.modes.push(active);
    }
}

/// Returns immediately; records each requested delay in milliseconds.
#[derive(Default)]
pub struct FakeDelay {
    pub calls: Vec<u32>,
}

impl FakeDelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls.push(ns / 1_000_000);
    }

    async fn delay_us(&mut self, us: u32) {
        self.calls.push(us / 1_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
    }
}
