//! Time management for the station
//!
//! Two independent notions of time, each behind its own trait:
//!
//! - [`Ticker`]: a wrapping millisecond uptime counter used only for
//!   interval gating. It wraps at `u32::MAX` (about 49.7 days) and all
//!   elapsed-time math must go through wrapping subtraction.
//! - [`WallClock`]: formatted time of day used only to stamp samples.
//!   Typically backed by a network time client; reports empty text until
//!   the first successful sync.
//!
//! The split matters: the scheduler must never gate on wall-clock time
//! (it can jump on sync) and the sample stamp must never be a raw tick
//! count (meaningless to a reader).

use core::fmt::Write as _;

use crate::constants::time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Device uptime in milliseconds. Wraps at `u32::MAX`.
pub type TickMs = u32;

/// Formatted wall-clock text, "HH:MM:SS". Empty means "never synced".
pub type TimeText = heapless::String<8>;

/// Wrap-safe elapsed milliseconds between two tick readings.
///
/// `later` is allowed to have wrapped past zero since `earlier`; the
/// unsigned subtraction still yields the true (small) distance. This is
/// the only correct way to compare ticks.
#[inline]
pub fn ticks_between(earlier: TickMs, later: TickMs) -> TickMs {
    later.wrapping_sub(earlier)
}

/// Source of monotonic uptime ticks
///
/// Implementations read a hardware timer, an RTOS tick count, or (for
/// tests) a plain field. The counter must be monotonic modulo wrapping;
/// it never goes backwards short of the wrap itself.
pub trait Ticker {
    /// Current uptime in milliseconds, wrapping at `u32::MAX`
    fn ticks_ms(&self) -> TickMs;
}

/// Controllable ticker for deterministic tests
#[derive(Debug, Clone)]
pub struct MockTicker {
    now: TickMs,
}

impl MockTicker {
    /// Create a ticker reading `start` milliseconds
    pub fn new(start: TickMs) -> Self {
        Self { now: start }
    }

    /// Jump to an absolute tick value
    pub fn set(&mut self, now: TickMs) {
        self.now = now;
    }

    /// Advance by `ms`, wrapping like the real counter
    pub fn advance(&mut self, ms: TickMs) {
        self.now = self.now.wrapping_add(ms);
    }
}

impl Ticker for MockTicker {
    fn ticks_ms(&self) -> TickMs {
        self.now
    }
}

/// Uptime ticker backed by `std::time::Instant` (requires std)
///
/// Counts milliseconds since construction, truncated to the same `u32`
/// wrapping domain the embedded counter uses.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct UptimeTicker {
    started: std::time::Instant,
}

#[cfg(feature = "std")]
impl UptimeTicker {
    /// Start counting from now
    pub fn new() -> Self {
        Self {
            started: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for UptimeTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Ticker for UptimeTicker {
    fn ticks_ms(&self) -> TickMs {
        self.started.elapsed().as_millis() as TickMs
    }
}

/// Wall-clock time of day, second resolution
///
/// The station never needs a calendar: samples are stamped with the time
/// of day only, exactly what the display renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    /// Hour, 0..=23
    pub hours: u8,
    /// Minute, 0..=59
    pub minutes: u8,
    /// Second, 0..=59
    pub seconds: u8,
}

impl TimeOfDay {
    /// Fold a Unix epoch (seconds, already zone-adjusted) into time of day
    pub fn from_epoch_seconds(epoch_s: u64) -> Self {
        let day_s = (epoch_s % SECONDS_PER_DAY) as u32;
        Self {
            hours: (day_s / SECONDS_PER_HOUR) as u8,
            minutes: (day_s % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
            seconds: (day_s % SECONDS_PER_MINUTE) as u8,
        }
    }

    /// Render as "HH:MM:SS"
    pub fn as_text(&self) -> TimeText {
        let mut text = TimeText::new();
        // Cannot fail: "HH:MM:SS" is exactly the capacity of TimeText
        write!(text, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds).ok();
        text
    }
}

/// Source of formatted wall-clock time
///
/// The scheduler calls `refresh()` then `formatted_time()` once per
/// acquisition cycle. A clock that cannot reach its upstream source
/// treats `refresh()` as a no-op and keeps reporting its last state.
pub trait WallClock {
    /// Refresh internal time from the upstream source, if due and reachable
    fn refresh(&mut self);

    /// Current time of day as "HH:MM:SS", or empty text if never synced
    fn formatted_time(&self) -> TimeText;
}

/// Hand-driven wall clock for tests and offline operation
#[derive(Debug, Clone)]
pub struct ManualClock {
    time: Option<TimeOfDay>,
}

impl ManualClock {
    /// A clock that has never synced; reports empty text
    pub fn unsynced() -> Self {
        Self { time: None }
    }

    /// A clock fixed at the given time of day
    pub fn at(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            time: Some(TimeOfDay { hours, minutes, seconds }),
        }
    }

    /// Move the clock to a new time of day
    pub fn set(&mut self, hours: u8, minutes: u8, seconds: u8) {
        self.time = Some(TimeOfDay { hours, minutes, seconds });
    }
}

impl WallClock for ManualClock {
    fn refresh(&mut self) {}

    fn formatted_time(&self) -> TimeText {
        match self.time {
            Some(t) => t.as_text(),
            None => TimeText::new(),
        }
    }
}

/// Wall clock backed by the host system time (requires std)
///
/// Always considered synced; applies a fixed zone offset in seconds.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemClock {
    offset_s: i64,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Create a system clock with the given zone offset (seconds east of UTC)
    pub fn new(offset_s: i64) -> Self {
        Self { offset_s }
    }
}

#[cfg(feature = "std")]
impl WallClock for SystemClock {
    fn refresh(&mut self) {}

    fn formatted_time(&self) -> TimeText {
        use std::time::{SystemTime, UNIX_EPOCH};

        let epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let local = epoch.saturating_add_signed(self.offset_s);
        TimeOfDay::from_epoch_seconds(local).as_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ticker_advances_and_wraps() {
        let mut ticker = MockTicker::new(u32::MAX - 2);
        assert_eq!(ticker.ticks_ms(), u32::MAX - 2);

        ticker.advance(5);
        assert_eq!(ticker.ticks_ms(), 2);
    }

    #[test]
    fn ticks_between_handles_wrap() {
        // Counter wrapped between the two readings
        assert_eq!(ticks_between(u32::MAX - 5, 10), 16);

        // Ordinary case
        assert_eq!(ticks_between(1000, 4000), 3000);
    }

    #[test]
    fn time_of_day_from_epoch() {
        // 2021-01-01 00:00:00 UTC
        let midnight = TimeOfDay::from_epoch_seconds(1_609_459_200);
        assert_eq!(midnight, TimeOfDay { hours: 0, minutes: 0, seconds: 0 });

        let t = TimeOfDay::from_epoch_seconds(1_609_459_200 + 13 * 3600 + 37 * 60 + 5);
        assert_eq!(t.as_text().as_str(), "13:37:05");
    }

    #[test]
    fn manual_clock_reports_empty_until_set() {
        let mut clock = ManualClock::unsynced();
        assert!(clock.formatted_time().is_empty());

        clock.set(8, 30, 0);
        assert_eq!(clock.formatted_time().as_str(), "08:30:00");
    }
}
