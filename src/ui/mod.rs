//! User interface subsystem - menu state and button sampling.
//!
//! The controller reacts to discrete sampled button events
//! ([`sampler::Sample`]) and cycles a fixed menu of screens
//! ([`menu::MenuController`]). The SSD1306 renderer lives in
//! [`display`] and is only compiled for the device build.

pub mod menu;
pub mod sampler;

#[cfg(feature = "hardware")]
pub mod display;

/// Screens (views) the display can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Startup banner with the version string.
    Bootup,
    /// Hostname, IP, CPU and memory usage.
    Info,
    /// Uptime, load averages, kernel version.
    Info2,
    /// Local time.
    Clock,
    /// "Reboot?" prompt.
    Reboot,
    /// Reboot countdown, shows the remaining count.
    Rebooting,
    /// "Shutdown?" prompt.
    Shutdown,
    /// Shutdown countdown, shows the remaining count.
    ShuttingDown,
    /// Cleared display.
    Blank,
}

/// Subset of screens treated as cycleable menu entries, in cycling
/// order. Wraps from the last entry back to the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuScreen {
    Info,
    Info2,
    Clock,
    Reboot,
    Shutdown,
}

impl MenuScreen {
    /// Menu entries in cycling order.
    pub const ALL: [MenuScreen; 5] = [
        MenuScreen::Info,
        MenuScreen::Info2,
        MenuScreen::Clock,
        MenuScreen::Reboot,
        MenuScreen::Shutdown,
    ];

    /// The destructive action a long press on this screen triggers,
    /// if any.
    pub fn action(self) -> Option<ActionKind> {
        match self {
            MenuScreen::Reboot => Some(ActionKind::Reboot),
            MenuScreen::Shutdown => Some(ActionKind::Shutdown),
            _ => None,
        }
    }

    /// Whether a long press on this screen triggers an action.
    pub fn is_actionable(self) -> bool {
        self.action().is_some()
    }
}

impl From<MenuScreen> for Screen {
    fn from(menu: MenuScreen) -> Self {
        match menu {
            MenuScreen::Info => Screen::Info,
            MenuScreen::Info2 => Screen::Info2,
            MenuScreen::Clock => Screen::Clock,
            MenuScreen::Reboot => Screen::Reboot,
            MenuScreen::Shutdown => Screen::Shutdown,
        }
    }
}

/// The two destructive actions behind the countdown protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Reboot,
    Shutdown,
}

impl ActionKind {
    /// Screen shown while this action's countdown runs.
    pub fn countdown_screen(self) -> Screen {
        match self {
            ActionKind::Reboot => Screen::Rebooting,
            ActionKind::Shutdown => Screen::ShuttingDown,
        }
    }

    /// Menu entry this action belongs to.
    pub fn menu_screen(self) -> MenuScreen {
        match self {
            ActionKind::Reboot => MenuScreen::Reboot,
            ActionKind::Shutdown => MenuScreen::Shutdown,
        }
    }
}

/// Classification of a completed press/release cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressKind {
    /// Shorter than the long-press threshold.
    Click,
    /// Held beyond the long-press threshold.
    LongPress,
}
