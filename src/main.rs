//! Device binary: wires the real panel hardware to the controller.
//!
//! Requires the `hardware` feature and a Raspberry Pi with the button,
//! LED, and SSD1306 attached as configured in `config.rs`. Log level is
//! picked up from `RUST_LOG` (env_logger).

use anyhow::{Context, Result};
use linux_embedded_hal::I2cdev;
use log::info;
use rppal::gpio::Gpio;

use oled_info::hw::disk::DiskStats;
use oled_info::hw::gpio::{PanelButton, PanelLed};
use oled_info::hw::power::SystemPower;
use oled_info::hw::stats::ShellStats;
use oled_info::ui::display::Oled;
use oled_info::{config, Controller, SystemClock};

fn main() -> Result<()> {
    env_logger::init();
    info!("oled-info {}", env!("CARGO_PKG_VERSION"));

    let gpio = Gpio::new().context("opening the GPIO controller")?;
    let button = PanelButton::new(&gpio, config::BUTTON_PIN)
        .with_context(|| format!("claiming button pin {}", config::BUTTON_PIN))?;
    let led = PanelLed::new(&gpio, config::LED_PIN)
        .with_context(|| format!("claiming LED pin {}", config::LED_PIN))?;

    let i2c = I2cdev::new(config::I2C_BUS)
        .with_context(|| format!("opening I2C bus {}", config::I2C_BUS))?;
    let display = Oled::new(i2c, ShellStats::new()).context("initialising the OLED")?;

    let mut controller = Controller::new(
        SystemClock::new(),
        button,
        led,
        display,
        DiskStats::new(config::DISKSTATS_PATH),
        SystemPower,
    );

    // Returns only after a reboot or shutdown command was launched.
    controller.run();
    info!("privileged action launched, exiting");
    Ok(())
}
