//! Privileged reboot/shutdown launcher.
//!
//! Fire-and-forget: the command is spawned and never awaited. A launch
//! failure is logged but not surfaced - by the time this runs the
//! controller is already on its one-way exit path.

use std::process::Command;

use log::{error, info};

use crate::hal::PrivilegedAction;
use crate::ui::ActionKind;

pub struct SystemPower;

impl PrivilegedAction for SystemPower {
    fn execute(&mut self, kind: ActionKind) {
        let args: [&str; 2] = match kind {
            ActionKind::Reboot => ["reboot", "now"],
            ActionKind::Shutdown => ["shutdown", "now"],
        };
        match Command::new("sudo").args(args).spawn() {
            Ok(_) => info!("launched: sudo {} {}", args[0], args[1]),
            Err(e) => error!("failed to launch sudo {}: {e}", args[0]),
        }
    }
}
