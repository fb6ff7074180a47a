//! Constants for the veranda measurement core
//!
//! Centralized, documented constants used throughout the station firmware.
//! All numeric values live here with their purpose, source, and units.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Physics**: model coefficients for derived metrics
//! - **Sensors**: DHT22 operational limits and timing
//! - **Time**: sampling cadence, blink periods, network-time defaults

/// Physical model coefficients for the derived metrics.
pub mod physics;

/// DHT22 sensor specifications and timing limits.
pub mod sensors;

/// Time-related constants: cadence, blink periods, clock defaults.
pub mod time;

// Re-export commonly used constants for convenience
pub use physics::{
    SOUND_SPEED_BASE_M_PER_S, SOUND_SPEED_HUMIDITY_COEFF, SOUND_SPEED_TEMP_COEFF,
};

pub use sensors::{
    DHT22_HUMIDITY_MAX_PCT, DHT22_HUMIDITY_MIN_PCT, DHT22_MIN_REPOLL_MS,
    DHT22_TEMP_MAX_C, DHT22_TEMP_MIN_C,
};

pub use time::{MS_PER_SECOND, SAMPLE_INTERVAL_MS, SECONDS_PER_DAY};
