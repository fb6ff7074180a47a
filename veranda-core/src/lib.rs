//! Measurement core for the veranda environment station
//!
//! Drives the station's single cooperative loop: sample a temperature/
//! humidity sensor on a fixed cadence, derive heat index and speed of
//! sound, stamp the result with wall-clock time, and publish it as one
//! whole value for the HTTP layer to read.
//!
//! Key constraints:
//! - Runs on small MCUs (no_std, no heap in the sampling path)
//! - One writer (the sampling loop), readers at any time
//! - A failed field read is NaN, never a substituted number
//!
//! ```
//! use veranda_core::{
//!     Sampler, SampleStore, FixedSensor, ManualClock, NullIndicator,
//!     constants::time::SAMPLE_INTERVAL_MS,
//! };
//!
//! let mut sampler = Sampler::new(SAMPLE_INTERVAL_MS);
//! let mut store = SampleStore::new();
//! let mut sensor = FixedSensor::new(Some(22.5), Some(55.0));
//! let mut clock = ManualClock::unsynced();
//! let mut led = NullIndicator;
//!
//! // Nothing due yet: the cadence has not elapsed.
//! sampler.poll(10, true, &mut sensor, &mut clock, &mut led, &mut store);
//! assert!(store.read().temperature_c.is_nan());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod indicator;
pub mod metrics;
pub mod sample;
pub mod scheduler;
pub mod sensor;
pub mod time;

// Public API
pub use errors::{SensorError, SensorResult};
pub use indicator::{BusyIndicator, LedMode, NullIndicator, StatusLed};
pub use sample::{RawReading, Sample, SampleStore};
pub use scheduler::{PollOutcome, Sampler, SamplerState};
pub use sensor::{Dht22, EnvironmentSensor, FixedSensor, FrameLink, PacedSensor};
pub use time::{ManualClock, MockTicker, Ticker, TickMs, TimeOfDay, TimeText, WallClock};

#[cfg(feature = "std")]
pub use time::{SystemClock, UptimeTicker};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
