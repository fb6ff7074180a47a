//! Status LED Logic
//!
//! The station's one LED tells the whole boot story: slow blink while
//! connecting with stored credentials, fast blink while the provisioning
//! portal is up, solid from connect until the first measurement, then
//! dark except for a short flash during each acquisition.
//!
//! This module is pure tick-driven logic: it decides the level, a
//! platform pin driver applies it. It shares no state with the sample
//! path: the blink task and the sampling loop only meet through
//! [`BusyIndicator`], which the scheduler raises for the duration of one
//! acquisition cycle.

use crate::constants::time::{BOOT_BLINK_PERIOD_MS, PORTAL_BLINK_PERIOD_MS};
use crate::time::{ticks_between, TickMs};

/// Something the scheduler can switch on while an acquisition runs
pub trait BusyIndicator {
    /// Raise or drop the busy signal
    fn set_busy(&mut self, busy: bool);
}

/// Indicator that ignores the busy signal (headless deployments, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullIndicator;

impl BusyIndicator for NullIndicator {
    fn set_busy(&mut self, _busy: bool) {}
}

/// What the LED is currently signalling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedMode {
    /// Booting, trying stored credentials: slow blink
    Boot,
    /// Provisioning portal active: fast blink
    ConfigPortal,
    /// Connected, waiting for the first measurement: solid on
    Solid,
    /// Normal operation: dark, flashing only while acquiring
    Idle,
}

impl LedMode {
    /// Blink half-period for this mode, `None` for steady modes
    fn period_ms(&self) -> Option<TickMs> {
        match self {
            LedMode::Boot => Some(BOOT_BLINK_PERIOD_MS),
            LedMode::ConfigPortal => Some(PORTAL_BLINK_PERIOD_MS),
            LedMode::Solid | LedMode::Idle => None,
        }
    }
}

/// Tick-driven status LED state machine
///
/// Call [`StatusLed::tick`] from the periodic blink task and drive the
/// pin with the returned level.
#[derive(Debug, Clone)]
pub struct StatusLed {
    mode: LedMode,
    level: bool,
    last_toggle: TickMs,
    busy: bool,
}

impl StatusLed {
    /// Start in boot-blink mode at the given tick
    pub fn new(now: TickMs) -> Self {
        Self {
            mode: LedMode::Boot,
            level: true,
            last_toggle: now,
            busy: false,
        }
    }

    /// Switch signalling mode; steady modes take effect immediately
    pub fn set_mode(&mut self, mode: LedMode, now: TickMs) {
        self.mode = mode;
        self.last_toggle = now;
        self.level = matches!(mode, LedMode::Boot | LedMode::ConfigPortal | LedMode::Solid);
    }

    /// Current signalling mode
    pub fn mode(&self) -> LedMode {
        self.mode
    }

    /// Advance the state machine and return the pin level to drive
    pub fn tick(&mut self, now: TickMs) -> bool {
        match self.mode.period_ms() {
            Some(period) => {
                if ticks_between(self.last_toggle, now) >= period {
                    self.level = !self.level;
                    self.last_toggle = now;
                }
                self.level
            }
            None => match self.mode {
                LedMode::Solid => true,
                // Dark, except while an acquisition is running
                _ => self.busy,
            },
        }
    }
}

impl BusyIndicator for StatusLed {
    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}
