//! Sample Data Model and Latest-Sample Store
//!
//! ## Overview
//!
//! One acquisition cycle produces one [`Sample`]: the raw temperature and
//! humidity, the two metrics derived from them, and the wall-clock stamp
//! of the moment they were taken. The [`SampleStore`] holds exactly the
//! latest one; the station keeps no history.
//!
//! ## The NaN contract
//!
//! A field that could not be read is NaN. NaN is a sentinel for "no valid
//! reading" and is distinct from zero; nothing in the core ever replaces
//! it with a default number. Temperature and humidity fail independently:
//! a sample may carry a valid temperature next to a NaN humidity. The
//! derived fields inherit NaN from their inputs arithmetically.
//!
//! ## Consistency
//!
//! A `Sample` is composed fully in local scope and published wholesale.
//! Its derived fields are always computed from its own temperature and
//! humidity, never mixed across acquisitions, and readers of the store
//! observe either the previous complete sample or the new complete one,
//! never a blend. On the single cooperative loop there is no suspension
//! point inside `publish`, so this holds by construction, without locks.

use crate::metrics;
use crate::time::TimeText;

/// One sensor acquisition before derivation
///
/// Per-field `Option` keeps the independent-failure semantics explicit at
/// the driver boundary; [`Sample::compose`] collapses `None` to NaN for
/// the rest of the system.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawReading {
    /// Temperature in Celsius, `None` if the read failed
    pub temperature_c: Option<f32>,
    /// Relative humidity in percent, `None` if the read failed
    pub humidity_pct: Option<f32>,
}

/// One complete set of readings, derived metrics, and timestamp
///
/// Immutable once composed. Any float field may be NaN ("no valid
/// reading"); `taken_at` is empty if the wall clock had not synced when
/// the sample was taken.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    /// Measured temperature (°C)
    pub temperature_c: f32,
    /// Measured relative humidity (%)
    pub humidity_pct: f32,
    /// Heat index derived from this sample's own fields (°C)
    pub heat_index_c: f32,
    /// Speed of sound derived from this sample's own fields (m/s)
    pub sound_speed_m_per_s: f32,
    /// Wall-clock stamp "HH:MM:SS", empty if the clock was unsynced
    pub taken_at: TimeText,
}

impl Sample {
    /// The startup sample: all fields NaN, empty timestamp
    pub fn empty() -> Self {
        Self {
            temperature_c: f32::NAN,
            humidity_pct: f32::NAN,
            heat_index_c: f32::NAN,
            sound_speed_m_per_s: f32::NAN,
            taken_at: TimeText::new(),
        }
    }

    /// Compose a full sample from one raw acquisition and a clock stamp
    ///
    /// Derived metrics are computed unconditionally from whatever the
    /// reading holds; a missing input surfaces as NaN in the derived
    /// fields through plain arithmetic, not a special-cased branch.
    pub fn compose(reading: RawReading, taken_at: TimeText) -> Self {
        let temperature_c = reading.temperature_c.unwrap_or(f32::NAN);
        let humidity_pct = reading.humidity_pct.unwrap_or(f32::NAN);

        Self {
            temperature_c,
            humidity_pct,
            heat_index_c: metrics::heat_index(temperature_c, humidity_pct),
            sound_speed_m_per_s: metrics::sound_speed(temperature_c, humidity_pct),
            taken_at,
        }
    }

    /// True if the temperature field holds a valid reading
    pub fn has_temperature(&self) -> bool {
        !self.temperature_c.is_nan()
    }

    /// True if the humidity field holds a valid reading
    pub fn has_humidity(&self) -> bool {
        !self.humidity_pct.is_nan()
    }
}

impl Default for Sample {
    fn default() -> Self {
        Self::empty()
    }
}

/// Holder of the single latest sample
///
/// Lifecycle: starts as the all-NaN startup sample, is overwritten
/// wholesale by the scheduler after each acquisition cycle, and is read
/// by presentation handlers at any time. There is no partial update path.
#[derive(Debug, Clone)]
pub struct SampleStore {
    latest: Sample,
}

impl SampleStore {
    /// Create a store holding the startup sample
    pub fn new() -> Self {
        Self {
            latest: Sample::empty(),
        }
    }

    /// Replace the stored sample, whole-value
    pub fn publish(&mut self, sample: Sample) {
        self.latest = sample;
    }

    /// The most recently published sample, or the startup sample
    pub fn read(&self) -> Sample {
        self.latest.clone()
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::new()
    }
}
