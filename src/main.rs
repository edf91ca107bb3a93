//! Firmware entry point (nRF52840).
//!
//! Brings up the inputs and the USB HID device, then runs the control
//! loop forever in the main task. The USB device runner is the only
//! other task.

#![no_std]
#![no_main]

mod board;
mod usb;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_nrf::config::HfclkSource;
use embassy_nrf::gpio::Pin as _;
use embassy_nrf::saadc::Input as _;
use embassy_time::Delay;
use embassy_usb::UsbDevice;
use joymouse::config::ControllerConfig;
use joymouse::Controller;
use usb::hid_device::{UsbDriver, UsbHidOutput};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) -> ! {
    usb::hid_device::run_usb_device(device).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // USBD needs the external high-frequency crystal.
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.hfclk_source = HfclkSource::ExternalXtal;
    let p = embassy_nrf::init(nrf_config);

    info!("joymouse starting");

    let inputs = board::BoardInputs::new(
        board::ButtonPins {
            switch: p.P0_11.degrade(),
            down: p.P0_12.degrade(),
            up: p.P0_24.degrade(),
            right: p.P0_25.degrade(),
            left: p.P1_08.degrade(),
        },
        board::AxisPins {
            zoom_y: p.P0_03.degrade_saadc(),
            incline_x: p.P0_04.degrade_saadc(),
            incline_y: p.P0_05.degrade_saadc(),
        },
        p.SAADC,
    )
    .await;

    let usb = usb::hid_device::init(p.USBD);
    spawner.must_spawn(usb_task(usb.device));
    let mut output = UsbHidOutput::new(usb.keyboard_writer, usb.mouse_writer);

    // Enumeration has to finish before the first report can go out.
    output.ready().await;

    let mut controller = Controller::new(
        ControllerConfig::DEFAULT,
        inputs,
        output,
        board::RttDiagnostics,
        Delay,
    );
    controller.startup().await;

    loop {
        if let Err(e) = controller.run_cycle().await {
            warn!("Cycle failed: {}", e);
        }
    }
}
