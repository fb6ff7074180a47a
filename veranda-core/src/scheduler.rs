//! Acquisition Scheduler
//!
//! ## Overview
//!
//! The station runs a single cooperative loop. Each pass, the loop hands
//! the current uptime tick to [`Sampler::poll`]; the sampler decides
//! whether a new acquisition is due and, if so, runs the whole cycle
//! synchronously: busy LED on, wall-clock refresh, sensor read, metric
//! derivation, wholesale publish, busy LED off.
//!
//! ## Gating
//!
//! An acquisition fires when **both** hold:
//!
//! - `ticks_between(last_acquired, now) > interval`, strictly greater,
//!   computed with wrapping subtraction so a tick-counter wrap never
//!   produces a false huge elapsed value (nor a false suppression);
//! - the `service_active` precondition, set once at startup by the
//!   provisioning flow. If the station never got on the network, the
//!   sampler stays in [`SamplerState::Idle`] for the life of the process.
//!
//! ## Concurrency
//!
//! The cycle is synchronous and non-preemptible: one cycle at a time by
//! construction, so there is no overlap protection and no lock. The
//! sample is composed fully in local scope and published in one step, so
//! HTTP handlers reading the store concurrently (between loop passes)
//! never observe a partial update. A failed field read yields NaN and the
//! cycle still completes; no retries, no timeouts, no cancellation.

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    // Keep the arguments used (and the format string checked) when
    // logging is compiled out
    ($($arg:tt)*) => {{ let _ = core::format_args!($($arg)*); }};
}

use crate::indicator::BusyIndicator;
use crate::sample::{Sample, SampleStore};
use crate::sensor::EnvironmentSensor;
use crate::time::{ticks_between, TickMs, WallClock};

/// Where the sampler is in its two-state cycle
///
/// `Acquiring` is only ever observable from within a cycle (callbacks,
/// indicator implementations); by the time `poll` returns the sampler is
/// back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerState {
    /// Waiting for the interval to elapse
    Idle,
    /// Running one synchronous acquisition cycle
    Acquiring,
}

/// What one `poll` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing due (interval not elapsed, or service inactive)
    Idle,
    /// One full acquisition cycle ran and a new sample was published
    Acquired,
}

/// Periodic acquisition driver
///
/// Owns the cadence state: the tick of the last acquisition and the
/// interval. Everything else (sensor, clock, indicator, store) is
/// borrowed per call, keeping the sampler free of platform types.
#[derive(Debug, Clone)]
pub struct Sampler {
    interval_ms: TickMs,
    last_acquired: TickMs,
    state: SamplerState,
}

impl Sampler {
    /// Create a sampler with the given cadence in milliseconds
    ///
    /// The cadence must sit above the sensor's re-poll floor; the shipped
    /// constant (`constants::time::SAMPLE_INTERVAL_MS`) leaves a wide
    /// margin over the DHT22's 2 s.
    pub fn new(interval_ms: TickMs) -> Self {
        Self {
            interval_ms,
            last_acquired: 0,
            state: SamplerState::Idle,
        }
    }

    /// Current cycle state
    pub fn state(&self) -> SamplerState {
        self.state
    }

    /// Tick of the last completed acquisition
    pub fn last_acquired(&self) -> TickMs {
        self.last_acquired
    }

    /// True if the interval has strictly elapsed at `now`
    fn due(&self, now: TickMs) -> bool {
        ticks_between(self.last_acquired, now) > self.interval_ms
    }

    /// Run one pass of the sampling loop
    ///
    /// If the cadence has strictly elapsed and `service_active` holds,
    /// runs a full acquisition cycle and publishes the new sample;
    /// otherwise does nothing.
    pub fn poll<S, C, I>(
        &mut self,
        now: TickMs,
        service_active: bool,
        sensor: &mut S,
        clock: &mut C,
        indicator: &mut I,
        store: &mut SampleStore,
    ) -> PollOutcome
    where
        S: EnvironmentSensor,
        C: WallClock,
        I: BusyIndicator,
    {
        if !service_active || !self.due(now) {
            return PollOutcome::Idle;
        }

        self.state = SamplerState::Acquiring;
        indicator.set_busy(true);

        clock.refresh();
        let taken_at = clock.formatted_time();

        let reading = sensor.read();
        let sample = Sample::compose(reading, taken_at);

        log_info!(
            "{} - Temp: {:.1} C - Humid: {:.1} % - Heat idx: {:.1} C - Snd spd: {:.1} m/s",
            sample.taken_at.as_str(),
            sample.temperature_c,
            sample.humidity_pct,
            sample.heat_index_c,
            sample.sound_speed_m_per_s,
        );

        store.publish(sample);
        self.last_acquired = now;

        indicator.set_busy(false);
        self.state = SamplerState::Idle;

        PollOutcome::Acquired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::NullIndicator;
    use crate::sensor::FixedSensor;
    use crate::time::ManualClock;

    const INTERVAL: TickMs = 30_000;

    fn rig() -> (Sampler, FixedSensor, ManualClock, NullIndicator, SampleStore) {
        (
            Sampler::new(INTERVAL),
            FixedSensor::new(Some(22.5), Some(55.0)),
            ManualClock::at(12, 0, 0),
            NullIndicator,
            SampleStore::new(),
        )
    }

    #[test]
    fn does_not_fire_at_or_under_the_interval() {
        let (mut sampler, mut sensor, mut clock, mut led, mut store) = rig();

        // Exactly the interval: strictly-greater gate must not fire
        let outcome = sampler.poll(INTERVAL, true, &mut sensor, &mut clock, &mut led, &mut store);
        assert_eq!(outcome, PollOutcome::Idle);
        assert_eq!(sensor.reads(), 0);
        assert!(store.read().temperature_c.is_nan());
    }

    #[test]
    fn fires_one_tick_past_the_interval() {
        let (mut sampler, mut sensor, mut clock, mut led, mut store) = rig();

        let outcome =
            sampler.poll(INTERVAL + 1, true, &mut sensor, &mut clock, &mut led, &mut store);
        assert_eq!(outcome, PollOutcome::Acquired);
        assert_eq!(sensor.reads(), 1);
        assert_eq!(sampler.last_acquired(), INTERVAL + 1);

        let sample = store.read();
        assert_eq!(sample.temperature_c, 22.5);
        assert_eq!(sample.humidity_pct, 55.0);
        assert_eq!(sample.taken_at.as_str(), "12:00:00");
    }

    #[test]
    fn never_fires_with_service_inactive() {
        let (mut sampler, mut sensor, mut clock, mut led, mut store) = rig();

        // Ten intervals elapsed, precondition false: still idle
        let outcome =
            sampler.poll(10 * INTERVAL, false, &mut sensor, &mut clock, &mut led, &mut store);
        assert_eq!(outcome, PollOutcome::Idle);
        assert_eq!(sensor.reads(), 0);
    }

    #[test]
    fn wraparound_elapsed_stays_small() {
        let (mut sampler, mut sensor, mut clock, mut led, mut store) = rig();

        // Last acquisition just before the counter wrapped
        sampler.poll(u32::MAX.wrapping_sub(5), true, &mut sensor, &mut clock, &mut led, &mut store);
        assert_eq!(sampler.last_acquired(), u32::MAX - 5);

        // 16 ms of real time later the counter reads 10; the wrapped
        // elapsed value is small, nowhere near a false huge one
        let outcome = sampler.poll(10, true, &mut sensor, &mut clock, &mut led, &mut store);
        assert_eq!(outcome, PollOutcome::Idle);
        assert_eq!(sensor.reads(), 1);
    }

    #[test]
    fn subsequent_cycles_space_by_the_interval() {
        let (mut sampler, mut sensor, mut clock, mut led, mut store) = rig();

        assert_eq!(
            sampler.poll(INTERVAL + 1, true, &mut sensor, &mut clock, &mut led, &mut store),
            PollOutcome::Acquired
        );
        // Interval measured from the last acquisition, not from zero
        assert_eq!(
            sampler.poll(2 * INTERVAL, true, &mut sensor, &mut clock, &mut led, &mut store),
            PollOutcome::Idle
        );
        assert_eq!(
            sampler.poll(2 * INTERVAL + 2, true, &mut sensor, &mut clock, &mut led, &mut store),
            PollOutcome::Acquired
        );
    }

    #[test]
    fn failed_fields_publish_as_nan() {
        let (mut sampler, _, mut clock, mut led, mut store) = rig();
        let mut sensor = FixedSensor::new(None, Some(48.0));

        sampler.poll(INTERVAL + 1, true, &mut sensor, &mut clock, &mut led, &mut store);

        let sample = store.read();
        assert!(sample.temperature_c.is_nan());
        assert_eq!(sample.humidity_pct, 48.0);
        assert!(sample.heat_index_c.is_nan());
        assert!(sample.sound_speed_m_per_s.is_nan());
    }

    #[test]
    fn busy_indicator_brackets_the_cycle() {
        struct Recording(Vec<bool>);
        impl BusyIndicator for Recording {
            fn set_busy(&mut self, busy: bool) {
                self.0.push(busy);
            }
        }

        let (mut sampler, mut sensor, mut clock, _, mut store) = rig();
        let mut led = Recording(Vec::new());

        sampler.poll(INTERVAL + 1, true, &mut sensor, &mut clock, &mut led, &mut store);
        assert_eq!(led.0, vec![true, false]);
        assert_eq!(sampler.state(), SamplerState::Idle);
    }

    #[test]
    fn stamp_is_empty_when_clock_never_synced() {
        let (mut sampler, mut sensor, _, mut led, mut store) = rig();
        let mut clock = ManualClock::unsynced();

        sampler.poll(INTERVAL + 1, true, &mut sensor, &mut clock, &mut led, &mut store);
        assert!(store.read().taken_at.is_empty());
    }
}
