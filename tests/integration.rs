//! Integration tests for joymouse host-testable logic.
//!
//! Drives the controller through whole sessions with scripted ports.

use embassy_futures::block_on;
use embedded_hal_async::delay::DelayNs;
use joymouse::arbiter::Action;
use joymouse::config::ControllerConfig;
use joymouse::hid::{HidReport, Key, KeyboardReport, MouseReport};
use joymouse::input::{AnalogChannel, AnalogSample, Button, Level};
use joymouse::ports::{DiagnosticPort, HidOutputPort, InputPort};
use joymouse::recenter::RecenterConfig;
use joymouse::{Controller, Error};

#[derive(Default)]
struct Panel {
    buttons: [bool; 5],
    raw: [u16; 3],
}

impl Panel {
    fn at_rest() -> Self {
        let mut panel = Self::default();
        // Switch released (pulled high), sticks centered.
        panel.buttons[Button::SwitchOnOff.index()] = true;
        panel.raw = [512; 3];
        panel
    }
}

impl InputPort for Panel {
    fn read_button(&mut self, button: Button) -> Result<Level, Error> {
        Ok(Level::from(self.buttons[button.index()]))
    }

    async fn read_analog(&mut self) -> Result<AnalogSample, Error> {
        Ok(AnalogSample::new(self.raw))
    }
}

#[derive(Default)]
struct Host {
    reports: Vec<HidReport>,
}

impl HidOutputPort for Host {
    async fn write_keyboard(&mut self, report: &KeyboardReport) -> Result<(), Error> {
        self.reports.push(HidReport::Keyboard(*report));
        Ok(())
    }

    async fn write_mouse(&mut self, report: &MouseReport) -> Result<(), Error> {
        self.reports.push(HidReport::Mouse(*report));
        Ok(())
    }
}

#[derive(Default)]
struct Console {
    lines: Vec<String>,
}

impl DiagnosticPort for Console {
    fn banner(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn mode_changed(&mut self, active: bool) {
        self.lines.push(format!("Mouse is active: {}.", active));
    }
}

#[derive(Default)]
struct Clock {
    elapsed_ms: u64,
}

impl DelayNs for Clock {
    async fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ms += u64::from(ns) / 1_000_000;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
    }
}

struct Session {
    controller: Controller<Panel, Host, Console, Clock>,
    panel: Panel,
}

impl Session {
    fn new(config: ControllerConfig) -> Self {
        let controller = Controller::new(
            config,
            Panel::at_rest(),
            Host::default(),
            Console::default(),
            Clock::default(),
        );
        Self {
            controller,
            panel: Panel::at_rest(),
        }
    }

    /// Mirror the desired panel state into the controller's port, then cycle.
    fn cycle(&mut self) -> Option<Action> {
        let panel = self.controller.input_mut();
        panel.buttons = self.panel.buttons;
        panel.raw = self.panel.raw;
        block_on(self.controller.run_cycle()).expect("cycle failed")
    }

    fn press_switch(&mut self) {
        self.panel.buttons[Button::SwitchOnOff.index()] = false;
        self.cycle();
        self.panel.buttons[Button::SwitchOnOff.index()] = true;
        self.cycle();
    }

    fn reports(&self) -> &[HidReport] {
        &self.controller.hid().output().reports
    }
}

#[test]
fn full_session_pan_then_recenter() {
    let mut session = Session::new(ControllerConfig::DEFAULT);
    block_on(session.controller.startup());
    session.cycle();

    session.press_switch();
    assert!(session.controller.mode().is_active());
    assert!(session.reports().is_empty());

    // Incline stick pushed right for three cycles.
    session.panel.raw[AnalogChannel::InclineX.index()] = 1023;
    for _ in 0..3 {
        assert_eq!(session.cycle(), Some(Action::Incline { dx: 4, dy: 0 }));
    }
    assert!(session.controller.hid().keyboard().is_held(Key::LeftShift));

    // Released: one recenter, then quiet.
    session.panel.raw[AnalogChannel::InclineX.index()] = 512;
    assert_eq!(session.cycle(), Some(Action::Recenter));
    assert_eq!(session.cycle(), Some(Action::Idle));

    let moves: Vec<(i8, i8)> = session
        .reports()
        .iter()
        .filter_map(|r| match r {
            HidReport::Mouse(m) if m.x.abs() == 127 || m.y.abs() == 127 => Some((m.x, m.y)),
            _ => None,
        })
        .collect();
    assert_eq!(moves.len(), 26);
    assert_eq!(moves[0], (-127, 0));
    assert_eq!(moves[11], (0, -127));
    assert_eq!(moves[18], (127, 0));
    assert_eq!(moves[25], (0, 127));

    let last_keyboard = session
        .reports()
        .iter()
        .rev()
        .find_map(|r| match r {
            HidReport::Keyboard(k) => Some(*k),
            _ => None,
        })
        .expect("keyboard reports were sent");
    assert!(last_keyboard.is_empty());

    assert_eq!(
        session.controller.diagnostics().lines,
        vec![
            "Initializing...".to_string(),
            "Initializing variables has finished.".to_string(),
            "Mouse is active: true.".to_string(),
        ]
    );
}

#[test]
fn switching_off_stops_all_output() {
    let mut session = Session::new(ControllerConfig::DEFAULT);
    session.cycle();
    session.press_switch();
    session.press_switch();
    assert!(!session.controller.mode().is_active());

    session.panel.buttons[Button::MoveLeft.index()] = true;
    session.panel.raw[AnalogChannel::ZoomY.index()] = 0;
    for _ in 0..4 {
        assert_eq!(session.cycle(), None);
    }
    assert!(session.reports().is_empty());
}

#[test]
fn recenter_counts_come_from_config() {
    let config = ControllerConfig {
        recenter: RecenterConfig {
            left: 2,
            up: 1,
            right: 1,
            down: 0,
        },
        ..ControllerConfig::DEFAULT
    };
    let mut session = Session::new(config);
    session.cycle();
    session.press_switch();

    session.panel.buttons[Button::MoveLeft.index()] = true;
    assert_eq!(session.cycle(), Some(Action::Nudge { dx: -4, dy: 0 }));
    session.panel.buttons[Button::MoveLeft.index()] = false;
    assert_eq!(session.cycle(), Some(Action::Recenter));

    let full_scale = session
        .reports()
        .iter()
        .filter(|r| matches!(r, HidReport::Mouse(m) if m.x.abs() == 127 || m.y.abs() == 127))
        .count();
    assert_eq!(full_scale, 4);
}

#[test]
fn pacing_and_debounce_time_is_accounted() {
    let mut session = Session::new(ControllerConfig::DEFAULT);
    // Switch level differs from the initial Low: one settle plus pacing.
    session.cycle();
    assert_eq!(session.controller.clock().elapsed_ms, 10);
    // Steady: pacing only.
    session.cycle();
    assert_eq!(session.controller.clock().elapsed_ms, 15);
}
