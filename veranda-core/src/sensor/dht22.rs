//! DHT22 (AM2302) Frame Handling
//!
//! The DHT22 answers one acquisition with a 40-bit frame on its
//! single-wire bus:
//!
//! ```text
//! byte 0  byte 1   byte 2  byte 3   byte 4
//! [ humidity u16 ] [ temperature  ] [checksum]
//!                   ^ bit 7 of byte 2 is the sign (signed magnitude)
//! ```
//!
//! Both words are tenths of a unit. The checksum is the low byte of the
//! sum of the four payload bytes.
//!
//! Bit-banging the wire protocol is platform work and lives behind
//! [`FrameLink`]; this module owns everything that is pure: frame
//! decoding and the mapping from a bus failure to the per-field `None`
//! the core expects. A bad frame never yields a substituted number.

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    // Keep the arguments used (and the format string checked) when
    // logging is compiled out
    ($($arg:tt)*) => {{ let _ = core::format_args!($($arg)*); }};
}

use crate::constants::sensors::DHT22_FRAME_LEN;
use crate::errors::{SensorError, SensorResult};
use crate::sample::RawReading;
use crate::sensor::EnvironmentSensor;

/// Transport delivering raw DHT22 frames
///
/// Implemented per platform over a GPIO bit-bang routine or a vendor
/// peripheral. Timing violations and line stalls surface as
/// [`SensorError::Timeout`]; this module handles the rest.
pub trait FrameLink {
    /// Perform one bus transaction and return the 5 frame bytes
    fn read_frame(&mut self) -> SensorResult<[u8; DHT22_FRAME_LEN]>;
}

/// Decode a raw frame into (temperature °C, humidity %)
///
/// Checks the frame length and the additive checksum, then decodes the
/// two signed-magnitude / unsigned tenths words. Taking a slice lets
/// transports that read byte-at-a-time hand over whatever they got; a
/// truncated bus transaction surfaces as [`SensorError::ShortFrame`].
pub fn decode_frame(frame: &[u8]) -> SensorResult<(f32, f32)> {
    if frame.len() < DHT22_FRAME_LEN {
        return Err(SensorError::ShortFrame { len: frame.len() });
    }

    let expected = frame[0]
        .wrapping_add(frame[1])
        .wrapping_add(frame[2])
        .wrapping_add(frame[3]);
    if frame[4] != expected {
        return Err(SensorError::ChecksumMismatch {
            got: frame[4],
            expected,
        });
    }

    let humidity = u16::from_be_bytes([frame[0], frame[1]]) as f32 / 10.0;

    let magnitude = u16::from_be_bytes([frame[2] & 0x7F, frame[3]]) as f32 / 10.0;
    let temperature = if frame[2] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };

    Ok((temperature, humidity))
}

/// DHT22 driver over any [`FrameLink`] transport
pub struct Dht22<L> {
    link: L,
}

impl<L: FrameLink> Dht22<L> {
    /// Create a driver over the given transport
    pub fn new(link: L) -> Self {
        Self { link }
    }
}

impl<L: FrameLink> EnvironmentSensor for Dht22<L> {
    fn read(&mut self) -> RawReading {
        // One frame carries both fields, so a bus failure loses both.
        // Partial validity still exists at the trait level for sensors
        // with independent conversions.
        match self.link.read_frame().and_then(|f| decode_frame(&f)) {
            Ok((temperature_c, humidity_pct)) => RawReading {
                temperature_c: Some(temperature_c),
                humidity_pct: Some(humidity_pct),
            },
            Err(e) => {
                log_warn!("DHT22 read failed: {}", e);
                RawReading::default()
            }
        }
    }
}
