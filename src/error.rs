//! Hardware bring-up errors.
//!
//! Only setup fails loudly. Once the loop is running, collaborator
//! failures (stats reads, display draws, diskstats scans) are absorbed
//! where they happen and rendered as absent data.

use std::fmt;

use linux_embedded_hal::i2cdev::linux::LinuxI2CError;

/// Errors surfaced while wiring up the panel hardware.
#[derive(Debug)]
pub enum Error {
    /// GPIO controller or pin acquisition failed.
    Gpio(rppal::gpio::Error),

    /// The I2C bus device could not be opened.
    I2c(LinuxI2CError),

    /// The SSD1306 did not respond to initialisation.
    DisplayInit,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Gpio(e) => write!(f, "GPIO setup failed: {e}"),
            Error::I2c(e) => write!(f, "I2C bus setup failed: {e}"),
            Error::DisplayInit => write!(f, "display initialisation failed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Gpio(e) => Some(e),
            Error::I2c(e) => Some(e),
            Error::DisplayInit => None,
        }
    }
}

impl From<rppal::gpio::Error> for Error {
    fn from(e: rppal::gpio::Error) -> Self {
        Error::Gpio(e)
    }
}

impl From<LinuxI2CError> for Error {
    fn from(e: LinuxI2CError) -> Self {
        Error::I2c(e)
    }
}
