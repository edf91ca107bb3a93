//! The polling cycle.
//!
//! One call to [`Controller::run_cycle`] is one iteration of the
//! firmware loop:
//!
//! ```text
//! debounce switch ─► mode edge? ─► inactive: done
//!                                  active:   debounce 4 buttons
//!                                            sample 3 axes
//!                                            arbitrate ─► emit
//! pacing delay
//! ```
//!
//! All state lives in [`ControllerState`]; the ports are the only
//! side effects.

use crate::arbiter::{self, Action, ConditionedInputs, DirectionalButtons};
use crate::config::ControllerConfig;
use crate::error::Error;
use crate::hid::emitter::HidEmitter;
use crate::hid::keyboard::Key;
use crate::hid::mouse::MouseButton;
use crate::input::{debounce, read_axis, AnalogChannel, Button, ButtonLevels, Level};
use crate::mode::{Mode, ModeController};
use crate::ports::{DiagnosticPort, HidOutputPort, InputPort};
use crate::recenter;
use embedded_hal_async::delay::DelayNs;

/// State carried from one cycle to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerState {
    pub mode: ModeController,
    /// Set by any pointer action, cleared once the recenter sequence ran.
    pub was_moved: bool,
    /// Debounced level of every button at the end of its last read.
    pub levels: ButtonLevels,
}

impl ControllerState {
    pub const fn new() -> Self {
        Self {
            mode: ModeController::new(),
            was_moved: false,
            levels: ButtonLevels::new(),
        }
    }
}

pub struct Controller<I, O, D, C> {
    config: ControllerConfig,
    state: ControllerState,
    input: I,
    hid: HidEmitter<O>,
    diagnostics: D,
    clock: C,
}

impl<I, O, D, C> Controller<I, O, D, C>
where
    I: InputPort,
    O: HidOutputPort,
    D: DiagnosticPort,
    C: DelayNs,
{
    pub fn new(config: ControllerConfig, input: I, output: O, diagnostics: D, clock: C) -> Self {
        Self {
            config,
            state: ControllerState::new(),
            input,
            hid: HidEmitter::new(output),
            diagnostics,
            clock,
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode.mode()
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn hid(&self) -> &HidEmitter<O> {
        &self.hid
    }

    pub fn hid_mut(&mut self) -> &mut HidEmitter<O> {
        &mut self.hid
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Startup banner around the settle delay that lets the inputs
    /// stabilise after pin configuration.
    pub async fn startup(&mut self) {
        self.diagnostics.banner("Initializing...");
        self.clock.delay_ms(self.config.startup_settle_ms).await;
        self.diagnostics.banner("Initializing variables has finished.");
    }

    /// One polling iteration followed by the pacing delay.
    ///
    /// Returns the action taken, or `None` while control is off. The
    /// pacing delay runs even when the cycle fails.
    pub async fn run_cycle(&mut self) -> Result<Option<Action>, Error> {
        let result = self.poll().await;
        self.clock.delay_ms(self.config.response_delay_ms).await;
        result
    }

    async fn poll(&mut self) -> Result<Option<Action>, Error> {
        let previous = self.state.levels.get(Button::SwitchOnOff);
        let switch = self.debounced(Button::SwitchOnOff).await?;
        if let Some(mode) = self.state.mode.update(previous, switch) {
            self.diagnostics.mode_changed(mode.is_active());
        }

        if !self.state.mode.is_active() {
            return Ok(None);
        }

        let inputs = self.condition().await?;
        let action = arbiter::arbitrate(&inputs, self.state.was_moved, self.config.step);
        self.apply(action).await?;
        Ok(Some(action))
    }

    /// Debounce a button against its carried level and carry the result.
    async fn debounced(&mut self, button: Button) -> Result<Level, Error> {
        let last = self.state.levels.get(button);
        let level = debounce(
            last,
            &mut self.input,
            button,
            &mut self.clock,
            self.config.debounce_settle_ms,
        )
        .await?;
        self.state.levels.set(button, level);
        Ok(level)
    }

    async fn pressed(&mut self, button: Button) -> Result<bool, Error> {
        let level = self.debounced(button).await?;
        Ok(button.is_pressed(level))
    }

    async fn condition(&mut self) -> Result<ConditionedInputs, Error> {
        let buttons = DirectionalButtons {
            down: self.pressed(Button::MoveDown).await?,
            up: self.pressed(Button::MoveUp).await?,
            right: self.pressed(Button::MoveRight).await?,
            left: self.pressed(Button::MoveLeft).await?,
        };

        let sample = self.input.read_analog().await?;
        let zoom = read_axis(&sample, AnalogChannel::ZoomY, &self.config.zoom);
        let incline_x = read_axis(&sample, AnalogChannel::InclineX, &self.config.incline);
        let incline_y = read_axis(&sample, AnalogChannel::InclineY, &self.config.incline);

        Ok(ConditionedInputs {
            zoom,
            incline_x,
            incline_y,
            buttons,
        })
    }

    async fn apply(&mut self, action: Action) -> Result<(), Error> {
        // Marked before any write: a partial gesture still leaves keys or
        // buttons held on the host and needs the recenter to clear them.
        if action.is_motion() {
            self.state.was_moved = true;
        }

        match action {
            Action::Zoom { wheel } => {
                self.hid.move_by(0, 0, wheel).await?;
            }
            Action::Incline { dx, dy } => {
                self.hid.press_key(Key::LeftShift).await?;
                self.hid.press_button(MouseButton::Middle).await?;
                self.hid.move_by(dx, dy, 0).await?;
            }
            Action::Nudge { dx, dy } => {
                self.hid.press_button(MouseButton::Middle).await?;
                self.hid.move_by(dx, dy, 0).await?;
            }
            Action::Recenter => {
                recenter::run(&mut self.hid, &self.config.recenter).await?;
                self.state.was_moved = false;
            }
            Action::Idle => {}
        }
        Ok(())
    }
}
