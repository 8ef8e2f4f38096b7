//! Front-panel controller for a headless Raspberry Pi.
//!
//! One button, one LED, one 128x32 SSD1306 OLED. A click cycles through
//! status screens (host info, uptime/load, clock); holding the button
//! for two seconds on the REBOOT or SHUTDOWN screen starts a visible
//! six-step countdown that any further press cancels. After twenty
//! seconds without interaction the display blanks and the LED falls
//! back to indicating disk activity.
//!
//! The interaction state machine lives in [`controller`] and is written
//! against the narrow traits in [`hal`], so the whole loop runs under
//! `cargo test` on a virtual clock with scripted collaborators. The
//! real GPIO/I2C implementations are compiled only with the `hardware`
//! feature, which the device binary requires.

pub mod activity;
pub mod config;
pub mod controller;
pub mod countdown;
pub mod hal;
pub mod stats;
pub mod timeout;
pub mod ui;

#[cfg(feature = "hardware")]
pub mod error;
#[cfg(feature = "hardware")]
pub mod hw;

pub use controller::{Controller, Step};
pub use hal::{Clock, SystemClock};
pub use ui::{ActionKind, MenuScreen, PressKind, Screen};
