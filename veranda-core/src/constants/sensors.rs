//! DHT22 Sensor Specifications
//!
//! Operational limits and timing for the AM2302/DHT22 temperature and
//! humidity sensor the station ships with. Values are from the Aosong
//! datasheet; they describe what the hardware can do, not what the
//! firmware validates (a reading outside these bounds still flows through
//! as-is, NaN is the only failure signal).

// ===== TIMING =====

/// Minimum interval between DHT22 acquisitions (ms).
///
/// The sensor needs 2 s between reads; polling faster returns the
/// previous conversion or garbage. The sampling cadence must sit safely
/// above this floor.
///
/// Source: Aosong AM2302 datasheet, "sensing period"
pub const DHT22_MIN_REPOLL_MS: u32 = 2000;

// ===== MEASUREMENT RANGES =====

/// Lowest temperature the DHT22 can report (°C).
///
/// Source: Aosong AM2302 datasheet
pub const DHT22_TEMP_MIN_C: f32 = -40.0;

/// Highest temperature the DHT22 can report (°C).
///
/// Source: Aosong AM2302 datasheet
pub const DHT22_TEMP_MAX_C: f32 = 80.0;

/// Lowest relative humidity the DHT22 can report (%).
///
/// Source: Aosong AM2302 datasheet
pub const DHT22_HUMIDITY_MIN_PCT: f32 = 0.0;

/// Highest relative humidity the DHT22 can report (%).
///
/// Source: Aosong AM2302 datasheet
pub const DHT22_HUMIDITY_MAX_PCT: f32 = 100.0;

// ===== WIRE FORMAT =====

/// Length of one DHT22 data frame in bytes.
///
/// Two bytes humidity, two bytes temperature, one checksum byte.
///
/// Source: Aosong AM2302 datasheet, single-bus communication section
pub const DHT22_FRAME_LEN: usize = 5;
