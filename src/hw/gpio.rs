//! GPIO button and status LED via rppal.
//!
//! The button is wired active-low with the internal pull-up. The LED
//! driver keeps the synchronous [`StatusLed`] interface the controller
//! expects; the blink/brightness pattern itself runs in a small worker
//! thread so a pulse keeps going between control-loop ticks.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use rppal::gpio::{Gpio, InputPin, OutputPin};

use crate::error::Error;
use crate::hal::{PhysicalButton, StatusLed};

/// Software PWM frequency for brightness levels.
const PWM_HZ: f64 = 100.0;

/// The front-panel push button.
pub struct PanelButton {
    pin: InputPin,
}

impl PanelButton {
    pub fn new(gpio: &Gpio, pin: u8) -> Result<Self, Error> {
        Ok(Self {
            pin: gpio.get(pin)?.into_input_pullup(),
        })
    }
}

impl PhysicalButton for PanelButton {
    fn is_pressed(&mut self) -> bool {
        // Active low.
        self.pin.is_low()
    }
}

enum LedCommand {
    Pulse { on: Duration, off: Duration },
    Level(f32),
}

/// The status LED. Dropping it stops the worker and turns the LED off.
pub struct PanelLed {
    tx: mpsc::Sender<LedCommand>,
}

impl PanelLed {
    pub fn new(gpio: &Gpio, pin: u8) -> Result<Self, Error> {
        let pin = gpio.get(pin)?.into_output_low();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || led_worker(pin, rx));
        Ok(Self { tx })
    }
}

impl StatusLed for PanelLed {
    fn set_pulse(&mut self, on: Duration, off: Duration) {
        let _ = self.tx.send(LedCommand::Pulse { on, off });
    }

    fn set_level(&mut self, level: f32) {
        let _ = self.tx.send(LedCommand::Level(level));
    }
}

fn led_worker(mut pin: OutputPin, rx: mpsc::Receiver<LedCommand>) {
    let mut command = LedCommand::Level(0.0);
    'main: loop {
        match command {
            LedCommand::Level(level) => {
                let _ = pin.set_pwm_frequency(PWM_HZ, f64::from(level.clamp(0.0, 1.0)));
                match rx.recv() {
                    Ok(next) => command = next,
                    Err(_) => break,
                }
            }
            LedCommand::Pulse { on, off } => {
                let _ = pin.clear_pwm();
                for (state_on, wait) in [(true, on), (false, off)] {
                    if state_on {
                        pin.set_high();
                    } else {
                        pin.set_low();
                    }
                    match rx.recv_timeout(wait) {
                        Ok(next) => {
                            command = next;
                            continue 'main;
                        }
                        Err(RecvTimeoutError::Timeout) => {}
                        Err(RecvTimeoutError::Disconnected) => break 'main,
                    }
                }
            }
        }
    }
    let _ = pin.clear_pwm();
    pin.set_low();
}
