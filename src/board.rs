//! nRF52840 bindings for the input and diagnostic ports.
//!
//! Five GPIO inputs (the on/off switch pulled up, directional buttons
//! left floating for their external bias) and a 3-channel SAADC at
//! 10-bit resolution so raw samples land in `0..=ADC_MAX`.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_nrf::saadc::{self, AnyInput, ChannelConfig, Resolution, Saadc};
use embassy_nrf::{bind_interrupts, peripherals};
use joymouse::config::ADC_MAX;
use joymouse::error::Error;
use joymouse::input::{AnalogSample, Button, ButtonBank, Level};
use joymouse::ports::{DiagnosticPort, InputPort};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
});

/// Pins in [`Button::ALL`] order.
pub struct ButtonPins {
    pub switch: AnyPin,
    pub down: AnyPin,
    pub up: AnyPin,
    pub right: AnyPin,
    pub left: AnyPin,
}

/// Analog inputs in [`joymouse::input::AnalogChannel::ALL`] order.
pub struct AxisPins {
    pub zoom_y: AnyInput,
    pub incline_x: AnyInput,
    pub incline_y: AnyInput,
}

pub struct BoardInputs {
    buttons: ButtonBank<Input<'static>>,
    adc: Saadc<'static, 3>,
}

impl BoardInputs {
    /// Configure the pins and calibrate the ADC.
    pub async fn new(buttons: ButtonPins, axes: AxisPins, saadc: peripherals::SAADC) -> Self {
        let buttons = ButtonBank::new([
            Input::new(buttons.switch, Pull::Up),
            Input::new(buttons.down, Pull::None),
            Input::new(buttons.up, Pull::None),
            Input::new(buttons.right, Pull::None),
            Input::new(buttons.left, Pull::None),
        ]);

        let mut config = saadc::Config::default();
        config.resolution = Resolution::_10BIT;
        let adc = Saadc::new(
            saadc,
            Irqs,
            config,
            [
                ChannelConfig::single_ended(axes.zoom_y),
                ChannelConfig::single_ended(axes.incline_x),
                ChannelConfig::single_ended(axes.incline_y),
            ],
        );
        adc.calibrate().await;
        info!("Inputs configured, SAADC calibrated");

        Self { buttons, adc }
    }
}

impl InputPort for BoardInputs {
    fn read_button(&mut self, button: Button) -> Result<Level, Error> {
        self.buttons.level(button)
    }

    async fn read_analog(&mut self) -> Result<AnalogSample, Error> {
        let mut buf = [0i16; 3];
        self.adc.sample(&mut buf).await;
        // Single-ended samples can dip slightly below zero near ground.
        Ok(AnalogSample::new(buf.map(|raw| raw.clamp(0, ADC_MAX as i16) as u16)))
    }
}

/// Operator output over defmt RTT.
pub struct RttDiagnostics;

impl DiagnosticPort for RttDiagnostics {
    fn banner(&mut self, message: &str) {
        info!("{}", message);
    }

    fn mode_changed(&mut self, active: bool) {
        info!("Mouse is active: {}.", active);
    }
}
