//! Cyclic menu position.
//!
//! The menu is the ordered [`MenuScreen::ALL`] list plus an optional
//! index; "none" is the blank/default screen shown when idle. Advancing
//! wraps from the last entry back to the first.

use crate::ui::MenuScreen;

/// Owns the current menu position. A click advances it, the action
/// timeout clears it, and a cancelled countdown restores it to the
/// interrupted screen.
#[derive(Debug, Default)]
pub struct MenuController {
    current: Option<usize>,
}

impl MenuController {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The screen currently selected, or `None` when idle/blank.
    pub fn current(&self) -> Option<MenuScreen> {
        self.current.map(|i| MenuScreen::ALL[i])
    }

    /// Move to the next screen and return it. From "none" or the last
    /// entry this resets to the first entry.
    pub fn advance(&mut self) -> MenuScreen {
        let next = match self.current {
            Some(i) if i + 1 < MenuScreen::ALL.len() => i + 1,
            _ => 0,
        };
        self.current = Some(next);
        MenuScreen::ALL[next]
    }

    /// Forget the position; the display falls back to blank.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Restore the position to a specific screen. Used after a
    /// cancelled countdown so the operator sees the same actionable
    /// screen instead of continuing to cycle.
    pub fn return_to(&mut self, screen: MenuScreen) {
        let index = MenuScreen::ALL
            .iter()
            .position(|&s| s == screen)
            .unwrap_or(0);
        self.current = Some(index);
    }
}
