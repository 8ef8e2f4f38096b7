//! SSD1306 OLED renderer (128x32, I2C).
//!
//! One draw function per screen. Draw and flush errors are absorbed -
//! a glitched frame must never take the control loop down - so only
//! initialisation can fail.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use log::warn;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::config::DISPLAY_ADDR;
use crate::error::Error;
use crate::hal::{DisplayRenderer, StatsSnapshot, SystemStats};
use crate::ui::Screen;

/// Type alias for the concrete display driver.
///
/// Generic over the I2C implementation so callers pass in their HAL's
/// I2C bus.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>;

/// Baselines of the three 6x10 text rows on the 32-pixel panel.
const ROWS: [i32; 3] = [8, 19, 30];

/// The OLED plus the statistics source the info screens draw from.
pub struct Oled<I2C, S> {
    display: Display<I2C>,
    stats: S,
}

impl<I2C, S> Oled<I2C, S>
where
    I2C: embedded_hal::i2c::I2c,
    S: SystemStats,
{
    /// Initialise the SSD1306 and clear the screen.
    pub fn new(i2c: I2C, stats: S) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_ADDR);
        let mut display = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| Error::DisplayInit)?;
        display.clear_buffer();
        let _ = display.flush();
        Ok(Self { display, stats })
    }

    fn line(&mut self, text: &str, row: usize) {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .build();
        let _ = Text::new(text, Point::new(0, ROWS[row]), style).draw(&mut self.display);
    }

    fn centered(&mut self, text: &str, baseline: i32, large: bool) {
        let style = MonoTextStyleBuilder::new()
            .font(if large { &FONT_10X20 } else { &FONT_6X10 })
            .text_color(BinaryColor::On)
            .build();
        let width = text.len() as i32 * if large { 10 } else { 6 };
        let x = (128 - width).max(0) / 2;
        let _ = Text::new(text, Point::new(x, baseline), style).draw(&mut self.display);
    }

    fn draw_bootup(&mut self) {
        let border = Rectangle::new(Point::new(1, 1), Size::new(125, 30))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1));
        let _ = border.draw(&mut self.display);
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .build();
        let _ = Text::new("Loading Info Screen", Point::new(6, 12), style).draw(&mut self.display);
        let version = concat!("Version: ", env!("CARGO_PKG_VERSION"));
        let _ = Text::new(version, Point::new(6, 26), style).draw(&mut self.display);
    }

    fn draw_info(&mut self, snapshot: &StatsSnapshot) {
        let hostname = truncated(snapshot.hostname.as_deref().unwrap_or(""), 16);
        let ip = truncated(snapshot.ip.as_deref().unwrap_or(""), 16);
        let cpu = snapshot
            .cpu_pct
            .map_or_else(|| " --".into(), |v| format!("{v:3.0}"));
        let mem = snapshot
            .mem_pct
            .map_or_else(|| "--".into(), |v| format!("{v:2.0}"));

        self.line(&format!("NAME:{hostname:>16}"), 0);
        self.line(&format!("IP  :{ip:>16}"), 1);
        self.line(&format!("CPU :{cpu}% | MEM: {mem}%"), 2);
    }

    fn draw_info2(&mut self, snapshot: &StatsSnapshot) {
        let uptime = truncated(snapshot.uptime_text.as_deref().unwrap_or(""), 14);
        let load = truncated(snapshot.load_text.as_deref().unwrap_or(""), 16);
        let kernel = truncated(snapshot.kernel_version.as_deref().unwrap_or(""), 19);

        self.line(&format!("UPTIME:{uptime:>14}"), 0);
        self.line(&format!("LOAD:{load:>16}"), 1);
        self.line(&format!("K:{kernel:>19}"), 2);
    }

    fn draw_clock(&mut self) {
        let now = chrono::Local::now();
        let timestamp = now.format("%H:%M:%S").to_string();
        let zone = now.format("%Z").to_string();
        self.centered(&timestamp, 18, true);
        self.centered(&zone, 31, false);
    }

    fn draw_prompt(&mut self, question: &str) {
        self.centered(question, ROWS[0], false);
        self.centered("Press and hold", ROWS[1], false);
        self.centered("to execute.", ROWS[2], false);
    }

    fn draw_countdown(&mut self, label: &str, count: u32) {
        self.line(&format!("{label:<16}{count:>3}"), 0);
        self.line(" (press to cancel)", 2);
    }
}

impl<I2C, S> DisplayRenderer for Oled<I2C, S>
where
    I2C: embedded_hal::i2c::I2c,
    S: SystemStats,
{
    fn render(&mut self, screen: Screen, count: Option<u32>) {
        self.display.clear_buffer();

        match screen {
            Screen::Bootup => self.draw_bootup(),
            Screen::Info => {
                let snapshot = self.stats.snapshot();
                self.draw_info(&snapshot);
            }
            Screen::Info2 => {
                let snapshot = self.stats.snapshot();
                self.draw_info2(&snapshot);
            }
            Screen::Clock => self.draw_clock(),
            Screen::Reboot => self.draw_prompt("REBOOT?"),
            Screen::Shutdown => self.draw_prompt("SHUTDOWN?"),
            Screen::Rebooting => self.draw_countdown(" Rebooting...", count.unwrap_or(0)),
            Screen::ShuttingDown => self.draw_countdown(" Shutting Down...", count.unwrap_or(0)),
            Screen::Blank => {}
        }

        if self.display.flush().is_err() {
            warn!("display flush failed for {screen:?}");
        }
    }
}

fn truncated(text: &str, max: usize) -> String {
    text.trim().chars().take(max).collect()
}
