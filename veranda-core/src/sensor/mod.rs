//! Sensor Acquisition Boundary
//!
//! The core sees a sensor through [`EnvironmentSensor`]: one call, one
//! [`RawReading`] with independently fallible fields. Temperature and
//! humidity are separate measurements on the hardware and fail
//! separately; the trait keeps that visible instead of collapsing a
//! partial failure into a lost sample.
//!
//! There is deliberately no error type on `read`: by the time a reading
//! reaches the core, "unavailable" is the only failure that matters, and
//! `None` carries it. Drivers log their specific cause at their own
//! boundary (see [`Dht22`]).
//!
//! [`PacedSensor`] enforces the hardware's minimum re-poll interval for
//! callers that drive a sensor directly. The sampling scheduler does not
//! need it (its cadence constant sits far above the floor) but ad-hoc
//! callers (diagnostics endpoints, shell commands) do.

pub mod dht22;

pub use dht22::{Dht22, FrameLink};

use crate::constants::sensors::DHT22_MIN_REPOLL_MS;
use crate::sample::RawReading;
use crate::time::{ticks_between, TickMs};

/// A temperature/humidity sensor as the core sees it
pub trait EnvironmentSensor {
    /// Acquire one reading; each field is `None` if that read failed
    fn read(&mut self) -> RawReading;

    /// Minimum interval between acquisitions this hardware tolerates (ms)
    ///
    /// Callers must not poll faster than this; the DHT22 floor is the
    /// default since it is the slowest sensor the station supports.
    fn min_repoll_ms(&self) -> TickMs {
        DHT22_MIN_REPOLL_MS
    }
}

/// Sensor double returning preset values, for tests and bring-up
#[derive(Debug, Clone)]
pub struct FixedSensor {
    temperature_c: Option<f32>,
    humidity_pct: Option<f32>,
    reads: u32,
}

impl FixedSensor {
    /// Create a sensor that always reports the given fields
    pub fn new(temperature_c: Option<f32>, humidity_pct: Option<f32>) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            reads: 0,
        }
    }

    /// Change what subsequent reads report
    pub fn set(&mut self, temperature_c: Option<f32>, humidity_pct: Option<f32>) {
        self.temperature_c = temperature_c;
        self.humidity_pct = humidity_pct;
    }

    /// How many times `read` has been called
    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl EnvironmentSensor for FixedSensor {
    fn read(&mut self) -> RawReading {
        self.reads += 1;
        RawReading {
            temperature_c: self.temperature_c,
            humidity_pct: self.humidity_pct,
        }
    }
}

/// Wrapper enforcing a sensor's minimum re-poll interval
///
/// Polling under the floor returns `nb::Error::WouldBlock` instead of
/// disturbing the hardware mid-conversion. The first poll always goes
/// through.
#[derive(Debug, Clone)]
pub struct PacedSensor<S> {
    inner: S,
    last_poll: Option<TickMs>,
}

impl<S: EnvironmentSensor> PacedSensor<S> {
    /// Wrap a sensor
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            last_poll: None,
        }
    }

    /// Acquire a reading if the hardware floor has elapsed since the
    /// last successful poll
    pub fn poll(&mut self, now: TickMs) -> nb::Result<RawReading, core::convert::Infallible> {
        if let Some(last) = self.last_poll {
            if ticks_between(last, now) < self.inner.min_repoll_ms() {
                return Err(nb::Error::WouldBlock);
            }
        }

        self.last_poll = Some(now);
        Ok(self.inner.read())
    }

    /// Access the wrapped sensor
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sensor_reports_preset_fields() {
        let mut sensor = FixedSensor::new(Some(22.5), None);
        let reading = sensor.read();

        assert_eq!(reading.temperature_c, Some(22.5));
        assert_eq!(reading.humidity_pct, None);
        assert_eq!(sensor.reads(), 1);
    }

    #[test]
    fn paced_sensor_blocks_under_the_floor() {
        let mut paced = PacedSensor::new(FixedSensor::new(Some(20.0), Some(50.0)));

        // First poll always goes through
        assert!(paced.poll(1000).is_ok());

        // 500 ms later: under the 2 s DHT22 floor
        assert_eq!(paced.poll(1500), Err(nb::Error::WouldBlock));
        assert_eq!(paced.inner().reads(), 1);

        // Past the floor: goes through again
        assert!(paced.poll(3100).is_ok());
        assert_eq!(paced.inner().reads(), 2);
    }

    #[test]
    fn paced_sensor_floor_survives_tick_wrap() {
        let mut paced = PacedSensor::new(FixedSensor::new(Some(20.0), Some(50.0)));

        assert!(paced.poll(u32::MAX - 100).is_ok());

        // 200 ms of real time elapsed across the wrap: still under floor
        assert_eq!(paced.poll(99), Err(nb::Error::WouldBlock));

        // 3 s of real time across the wrap: clear of the floor
        assert!(paced.poll(2900).is_ok());
    }
}
