//! Real hardware and OS collaborators for the device build.

pub mod disk;
pub mod gpio;
pub mod power;
pub mod stats;
