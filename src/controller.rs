//! The main control loop.
//!
//! A single cooperative thread alternates between two phases: while the
//! action timeout is counting down it ticks every 0.1 s watching for
//! expiry; once expired it polls disk activity every 0.4 s and drives
//! the LED. Either way each iteration ends by sampling the button, and
//! a press pulls the loop into tight 0.05 s debounced sampling until
//! release.
//!
//! All previously ambient state (menu position, cancel flag, press
//! timestamps) lives in the [`Controller`] and is threaded through by
//! exclusive reference.

use log::{debug, info};

use crate::activity::{led_pattern, LedPattern};
use crate::config::{
    ACTION_INITIAL_TIMEOUT, ACTION_TIMEOUT, DEBOUNCE_DELAY, IDLE_TICK, LED_BOOTUP_PULSE,
    TIMEOUT_TICK,
};
use crate::countdown::{CountdownExecutor, Outcome};
use crate::hal::{
    Clock, DiskActivity, DisplayRenderer, PhysicalButton, PrivilegedAction, StatusLed,
};
use crate::timeout::ActionTimeout;
use crate::ui::menu::MenuController;
use crate::ui::sampler::{ButtonSampler, Sample};
use crate::ui::{ActionKind, PressKind, Screen};

/// Outcome of one loop iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep looping.
    Continue,
    /// A destructive action was launched; the process must terminate.
    Exit,
}

/// Owns the collaborators and every piece of interaction state.
pub struct Controller<C, B, L, D, A, P> {
    clock: C,
    button: B,
    led: L,
    display: D,
    disk: A,
    action: P,
    menu: MenuController,
    timeout: ActionTimeout,
    sampler: ButtonSampler,
    countdown: CountdownExecutor,
    cancel_pending: bool,
}

impl<C, B, L, D, A, P> Controller<C, B, L, D, A, P>
where
    C: Clock,
    B: PhysicalButton,
    L: StatusLed,
    D: DisplayRenderer,
    A: DiskActivity,
    P: PrivilegedAction,
{
    pub fn new(clock: C, button: B, led: L, display: D, disk: A, action: P) -> Self {
        Self {
            clock,
            button,
            led,
            display,
            disk,
            action,
            menu: MenuController::new(),
            timeout: ActionTimeout::new(),
            sampler: ButtonSampler::new(),
            countdown: CountdownExecutor::new(),
            cancel_pending: false,
        }
    }

    /// Show the bootup banner and arm the initial display timeout.
    pub fn start(&mut self) {
        self.display.render(Screen::Bootup, None);
        self.led.set_pulse(LED_BOOTUP_PULSE, LED_BOOTUP_PULSE);
        self.timeout.reset(ACTION_INITIAL_TIMEOUT);
    }

    /// Loop until a destructive action fires. The caller should
    /// terminate the process when this returns.
    pub fn run(&mut self) {
        self.start();
        while self.step() == Step::Continue {}
    }

    /// One loop iteration: timeout tick or idle poll, then button
    /// sampling.
    pub fn step(&mut self) -> Step {
        if self.timeout.is_active() {
            self.clock.sleep(TIMEOUT_TICK);
            if self.timeout.tick(TIMEOUT_TICK) {
                info!("display timeout expired");
                self.menu.clear();
                self.display.render(Screen::Blank, None);
                self.apply_led(led_pattern(false));
            }
        } else {
            let pattern = led_pattern(self.disk.is_active());
            self.apply_led(pattern);
            self.clock.sleep(IDLE_TICK);
        }
        self.sample_press()
    }

    /// Current menu position (for observation; the controller is the
    /// only mutator).
    pub fn current_screen(&self) -> Option<crate::ui::MenuScreen> {
        self.menu.current()
    }

    fn apply_led(&mut self, pattern: LedPattern) {
        match pattern {
            LedPattern::Pulse { on, off } => self.led.set_pulse(on, off),
            LedPattern::Level(level) => self.led.set_level(level),
        }
    }

    /// Sample the button, staying in a tight debounced loop while it is
    /// held, and react to the classified release.
    fn sample_press(&mut self) -> Step {
        loop {
            let now = self.clock.elapsed();
            let is_down = self.button.is_pressed();
            match self.sampler.sample(now, is_down) {
                Sample::Idle => return Step::Continue,
                Sample::PressStarted => {
                    // Interrupt the blank idle display right away; the
                    // click itself is only classified at release.
                    if !self.timeout.is_active() {
                        self.display.render(Screen::Info, None);
                    }
                    self.timeout.reset(ACTION_TIMEOUT);
                    self.clock.sleep(DEBOUNCE_DELAY);
                }
                Sample::Held(duration) => {
                    debug!("press held for {duration:?}");
                    self.clock.sleep(DEBOUNCE_DELAY);
                }
                Sample::Released(kind) => return self.on_release(kind),
            }
        }
    }

    fn on_release(&mut self, kind: PressKind) -> Step {
        // The cancel flag is consumed exactly once, at the start of the
        // next completed press classification. The consuming release is
        // the cancel gesture itself: it must neither advance the menu
        // nor re-trigger a countdown.
        if std::mem::take(&mut self.cancel_pending) {
            debug!("release consumed as countdown cancel");
            return Step::Continue;
        }
        match kind {
            PressKind::Click => {
                let screen = self.menu.advance();
                info!("menu -> {screen:?}");
                self.display.render(screen.into(), None);
                Step::Continue
            }
            PressKind::LongPress => match self.menu.current().and_then(|s| s.action()) {
                Some(action) => self.run_countdown(action),
                // Long press on an informational screen does nothing.
                None => Step::Continue,
            },
        }
    }

    fn run_countdown(&mut self, action: ActionKind) -> Step {
        let outcome = self.countdown.run(
            &mut self.clock,
            &mut self.button,
            &mut self.display,
            action,
        );
        match outcome {
            Outcome::Cancelled => {
                self.cancel_pending = true;
                let screen = action.menu_screen();
                self.menu.return_to(screen);
                self.display.render(screen.into(), None);
                self.timeout.reset(ACTION_TIMEOUT);
                Step::Continue
            }
            Outcome::Executed => {
                info!("executing {action:?}");
                self.display.render(Screen::Blank, None);
                self.action.execute(action);
                Step::Exit
            }
        }
    }
}
