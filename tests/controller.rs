//! End-to-end scenarios for the interaction state machine, driven on a
//! virtual clock with scripted collaborators. No sleeps, no hardware.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use oled_info::activity::LedPattern;
use oled_info::hal::{
    Clock, DiskActivity, DisplayRenderer, PhysicalButton, PrivilegedAction, StatusLed,
};
use oled_info::{ActionKind, Controller, MenuScreen, Screen, Step};

type Renders = Rc<RefCell<Vec<(Screen, Option<u32>)>>>;

/// Virtual time in milliseconds, advanced by sleeping.
struct TestClock {
    time: Rc<Cell<u64>>,
}

impl Clock for TestClock {
    fn elapsed(&self) -> Duration {
        Duration::from_millis(self.time.get())
    }

    fn sleep(&mut self, duration: Duration) {
        self.time.set(self.time.get() + duration.as_millis() as u64);
    }
}

/// Button scripted by absolute press windows, plus an optional
/// "cancel" behaviour that starts a press the moment a countdown
/// screen shows a given count and holds it for a fixed time.
struct TestButton {
    time: Rc<Cell<u64>>,
    windows: Rc<RefCell<Vec<(u64, u64)>>>,
    renders: Renders,
    cancel_at_count: Option<(u32, u64)>,
    cancel_press_started: Option<u64>,
}

impl PhysicalButton for TestButton {
    fn is_pressed(&mut self) -> bool {
        let now = self.time.get();
        if self
            .windows
            .borrow()
            .iter()
            .any(|&(start, end)| now >= start && now < end)
        {
            return true;
        }
        if let Some((count, hold_ms)) = self.cancel_at_count {
            if let Some(started) = self.cancel_press_started {
                return now < started + hold_ms;
            }
            if let Some(&(screen, Some(shown))) = self.renders.borrow().last() {
                let counting =
                    matches!(screen, Screen::Rebooting | Screen::ShuttingDown);
                if counting && shown == count {
                    self.cancel_press_started = Some(now);
                    return true;
                }
            }
        }
        false
    }
}

struct TestDisplay {
    renders: Renders,
}

impl DisplayRenderer for TestDisplay {
    fn render(&mut self, screen: Screen, count: Option<u32>) {
        self.renders.borrow_mut().push((screen, count));
    }
}

struct TestLed {
    patterns: Rc<RefCell<Vec<LedPattern>>>,
}

impl StatusLed for TestLed {
    fn set_pulse(&mut self, on: Duration, off: Duration) {
        self.patterns.borrow_mut().push(LedPattern::Pulse { on, off });
    }

    fn set_level(&mut self, level: f32) {
        self.patterns.borrow_mut().push(LedPattern::Level(level));
    }
}

struct TestDisk {
    active: Rc<Cell<bool>>,
}

impl DiskActivity for TestDisk {
    fn is_active(&mut self) -> bool {
        self.active.get()
    }
}

struct TestPower {
    executed: Rc<RefCell<Vec<ActionKind>>>,
}

impl PrivilegedAction for TestPower {
    fn execute(&mut self, kind: ActionKind) {
        self.executed.borrow_mut().push(kind);
    }
}

/// Handles the test keeps while the controller owns the mocks.
struct Rig {
    controller: Controller<TestClock, TestButton, TestLed, TestDisplay, TestDisk, TestPower>,
    time: Rc<Cell<u64>>,
    windows: Rc<RefCell<Vec<(u64, u64)>>>,
    renders: Renders,
    patterns: Rc<RefCell<Vec<LedPattern>>>,
    disk_active: Rc<Cell<bool>>,
    executed: Rc<RefCell<Vec<ActionKind>>>,
}

fn rig(cancel_at_count: Option<(u32, u64)>) -> Rig {
    let time = Rc::new(Cell::new(0));
    let windows = Rc::new(RefCell::new(Vec::new()));
    let renders: Renders = Rc::new(RefCell::new(Vec::new()));
    let patterns = Rc::new(RefCell::new(Vec::new()));
    let disk_active = Rc::new(Cell::new(false));
    let executed = Rc::new(RefCell::new(Vec::new()));

    let controller = Controller::new(
        TestClock {
            time: Rc::clone(&time),
        },
        TestButton {
            time: Rc::clone(&time),
            windows: Rc::clone(&windows),
            renders: Rc::clone(&renders),
            cancel_at_count,
            cancel_press_started: None,
        },
        TestLed {
            patterns: Rc::clone(&patterns),
        },
        TestDisplay {
            renders: Rc::clone(&renders),
        },
        TestDisk {
            active: Rc::clone(&disk_active),
        },
        TestPower {
            executed: Rc::clone(&executed),
        },
    );

    Rig {
        controller,
        time,
        windows,
        renders,
        patterns,
        disk_active,
        executed,
    }
}

impl Rig {
    /// Step until the predicate holds; panics if it never does.
    fn step_until(&mut self, what: &str, pred: impl Fn(&Rig) -> bool) -> Step {
        for _ in 0..20_000 {
            let step = self.controller.step();
            if pred(self) {
                return step;
            }
            if step == Step::Exit {
                panic!("controller exited while waiting for: {what}");
            }
        }
        panic!("never reached: {what}");
    }

    fn now(&self) -> u64 {
        self.time.get()
    }

    /// Schedule a press window relative to the current virtual time.
    fn press_in(&self, after_ms: u64, hold_ms: u64) {
        let start = self.now() + after_ms;
        self.windows.borrow_mut().push((start, start + hold_ms));
    }

    fn click(&mut self, expect: MenuScreen) {
        self.press_in(200, 500);
        self.step_until(&format!("menu at {expect:?}"), |r| {
            r.controller.current_screen() == Some(expect)
        });
    }

    fn last_render(&self) -> Option<(Screen, Option<u32>)> {
        self.renders.borrow().last().copied()
    }

    fn countdown_counts(&self) -> Vec<u32> {
        self.renders
            .borrow()
            .iter()
            .filter(|(s, _)| matches!(s, Screen::Rebooting | Screen::ShuttingDown))
            .filter_map(|&(_, c)| c)
            .collect()
    }
}

#[test]
fn bootup_screen_blanks_after_initial_timeout() {
    let mut r = rig(None);
    r.controller.start();
    assert_eq!(r.last_render(), Some((Screen::Bootup, None)));

    r.step_until("blank after bootup", |r| {
        r.last_render() == Some((Screen::Blank, None))
    });
    // 10 s initial timeout at 0.1 s ticks.
    assert_eq!(r.now(), 10_000);
    assert_eq!(r.controller.current_screen(), None);
}

#[test]
fn first_click_interrupts_idle_with_the_info_screen() {
    let mut r = rig(None);
    r.controller.start();
    r.step_until("blank", |r| r.last_render() == Some((Screen::Blank, None)));

    r.click(MenuScreen::Info);
    // The press-start sample renders INFO immediately, before release.
    let renders = r.renders.borrow();
    let after_blank: Vec<_> = renders
        .iter()
        .skip_while(|&&(s, _)| s != Screen::Blank)
        .collect();
    assert!(after_blank
        .iter()
        .all(|&&(s, _)| s == Screen::Blank || s == Screen::Info));
}

#[test]
fn clicks_cycle_through_the_menu_and_wrap() {
    let mut r = rig(None);
    r.controller.start();
    r.step_until("blank", |r| r.last_render() == Some((Screen::Blank, None)));

    for expect in [
        MenuScreen::Info,
        MenuScreen::Info2,
        MenuScreen::Clock,
        MenuScreen::Reboot,
        MenuScreen::Shutdown,
        MenuScreen::Info, // sixth click wraps
    ] {
        r.click(expect);
        assert_eq!(r.last_render(), Some((Screen::from(expect), None)));
    }
    assert!(r.executed.borrow().is_empty());
}

#[test]
fn menu_blanks_again_after_twenty_idle_seconds() {
    let mut r = rig(None);
    r.controller.start();
    r.step_until("blank", |r| r.last_render() == Some((Screen::Blank, None)));
    r.click(MenuScreen::Info);

    r.step_until("second blank", |r| {
        r.last_render() == Some((Screen::Blank, None))
    });
    assert_eq!(r.controller.current_screen(), None);
}

#[test]
fn long_press_on_reboot_runs_the_full_countdown_and_executes() {
    let mut r = rig(None);
    r.controller.start();
    r.step_until("blank", |r| r.last_render() == Some((Screen::Blank, None)));
    for expect in [
        MenuScreen::Info,
        MenuScreen::Info2,
        MenuScreen::Clock,
        MenuScreen::Reboot,
    ] {
        r.click(expect);
    }

    // Hold well past the 2 s threshold.
    r.press_in(200, 2800);
    let release_deadline = r.now() + 200 + 2800;
    let mut last = Step::Continue;
    for _ in 0..20_000 {
        last = r.controller.step();
        if last == Step::Exit {
            break;
        }
    }
    assert_eq!(last, Step::Exit);
    assert_eq!(r.countdown_counts(), vec![6, 5, 4, 3, 2, 1]);
    assert_eq!(*r.executed.borrow(), vec![ActionKind::Reboot]);
    // Blank is rendered before the command launches.
    assert_eq!(r.last_render(), Some((Screen::Blank, None)));
    // Grace second plus six steps after the release.
    assert!(r.now() >= release_deadline + 7000);
}

#[test]
fn long_press_on_shutdown_executes_shutdown() {
    let mut r = rig(None);
    r.controller.start();
    r.step_until("blank", |r| r.last_render() == Some((Screen::Blank, None)));
    for expect in [
        MenuScreen::Info,
        MenuScreen::Info2,
        MenuScreen::Clock,
        MenuScreen::Reboot,
        MenuScreen::Shutdown,
    ] {
        r.click(expect);
    }

    r.press_in(200, 2800);
    let mut last = Step::Continue;
    for _ in 0..20_000 {
        last = r.controller.step();
        if last == Step::Exit {
            break;
        }
    }
    assert_eq!(last, Step::Exit);
    assert_eq!(*r.executed.borrow(), vec![ActionKind::Shutdown]);
    assert!(r
        .renders
        .borrow()
        .iter()
        .any(|&(s, c)| s == Screen::ShuttingDown && c == Some(6)));
}

#[test]
fn press_at_count_four_cancels_and_returns_to_reboot() {
    // Press the button when the countdown shows 4, hold 1.5 s.
    let mut r = rig(Some((4, 1500)));
    r.controller.start();
    r.step_until("blank", |r| r.last_render() == Some((Screen::Blank, None)));
    for expect in [
        MenuScreen::Info,
        MenuScreen::Info2,
        MenuScreen::Clock,
        MenuScreen::Reboot,
    ] {
        r.click(expect);
    }

    r.press_in(200, 2800);
    r.step_until("back on the reboot screen", |r| {
        r.last_render() == Some((Screen::Reboot, None))
    });

    // Countdown stopped at 4; nothing was executed.
    assert_eq!(r.countdown_counts(), vec![6, 5, 4]);
    assert!(r.executed.borrow().is_empty());
    assert_eq!(r.controller.current_screen(), Some(MenuScreen::Reboot));

    // The cancel press's own release must not advance the menu. Step
    // through the remainder of the hold plus a few idle seconds.
    for _ in 0..40 {
        assert_eq!(r.controller.step(), Step::Continue);
    }
    assert_eq!(r.controller.current_screen(), Some(MenuScreen::Reboot));

    // A later unrelated click advances normally: the flag did not leak.
    r.click(MenuScreen::Shutdown);
    assert!(r.executed.borrow().is_empty());
}

#[test]
fn long_press_on_an_informational_screen_does_nothing() {
    let mut r = rig(None);
    r.controller.start();
    r.step_until("blank", |r| r.last_render() == Some((Screen::Blank, None)));
    r.click(MenuScreen::Info);

    r.press_in(200, 2800);
    let deadline = r.now() + 5000;
    r.step_until("past the long press", |r| r.now() > deadline);

    assert!(r.countdown_counts().is_empty());
    assert!(r.executed.borrow().is_empty());
    // A long press is not a click: the menu did not advance.
    assert_eq!(r.controller.current_screen(), Some(MenuScreen::Info));
}

#[test]
fn idle_led_follows_disk_activity() {
    let mut r = rig(None);
    r.controller.start();
    r.step_until("blank", |r| r.last_render() == Some((Screen::Blank, None)));
    r.patterns.borrow_mut().clear();

    r.controller.step();
    assert_eq!(
        r.patterns.borrow().last(),
        Some(&LedPattern::Level(0.25)),
        "idle disk holds the resting level"
    );

    r.disk_active.set(true);
    r.controller.step();
    assert_eq!(
        r.patterns.borrow().last(),
        Some(&LedPattern::Pulse {
            on: Duration::from_millis(100),
            off: Duration::from_millis(100),
        }),
        "disk activity blinks fast"
    );
}

#[test]
fn led_does_not_change_while_the_timeout_is_active() {
    let mut r = rig(None);
    r.controller.start();
    r.step_until("blank", |r| r.last_render() == Some((Screen::Blank, None)));
    r.click(MenuScreen::Info);

    // Timeout is now armed; activity polling must not run.
    r.patterns.borrow_mut().clear();
    r.disk_active.set(true);
    for _ in 0..50 {
        r.controller.step();
    }
    assert!(r.patterns.borrow().is_empty());
}
