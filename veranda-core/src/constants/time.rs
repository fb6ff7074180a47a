//! Time-Related Constants
//!
//! Sampling cadence, status-LED blink periods, and network-time defaults
//! for the station firmware.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: u32 = 3600;

/// Seconds per day. Used to fold an epoch into time-of-day.
pub const SECONDS_PER_DAY: u64 = 86_400;

// ===== SAMPLING CADENCE =====

/// Interval between sensor acquisitions (ms).
///
/// 30 s between samples: indoor temperature and humidity move slowly,
/// and the cadence stays far above the sensor's 2 s re-poll floor
/// (`DHT22_MIN_REPOLL_MS`). The gate is strictly greater-than, so the
/// first acquisition lands one tick after the interval elapses.
pub const SAMPLE_INTERVAL_MS: u32 = 30_000;

// ===== STATUS LED =====

/// Blink period while booting and trying stored credentials (ms).
///
/// Slow blink: the station is alive and connecting.
pub const BOOT_BLINK_PERIOD_MS: u32 = 600;

/// Blink period while the configuration portal is up (ms).
///
/// Fast blink: the station is waiting for the user to provision WiFi.
pub const PORTAL_BLINK_PERIOD_MS: u32 = 200;

// ===== NETWORK TIME =====

/// Default NTP pool hostname.
pub const NTP_DEFAULT_POOL: &str = "europe.pool.ntp.org";

/// Default zone offset applied to network time (seconds).
///
/// The station renders local time, not UTC. CET is the shipped default.
pub const NTP_DEFAULT_OFFSET_S: i64 = 3600;

/// Minimum interval between network time refreshes (ms).
///
/// `WallClock::refresh` is called once per acquisition cycle; the clock
/// only goes out to the network this often and freewheels in between.
pub const NTP_UPDATE_INTERVAL_MS: u32 = 60_000;

/// Offset between the NTP era (1900) and the Unix epoch (1970), seconds.
///
/// Source: RFC 4330, section 3
pub const NTP_UNIX_EPOCH_DELTA_S: u64 = 2_208_988_800;
