//! Error Types for Sensor Acquisition
//!
//! The station's error surface is deliberately tiny. A failed reading is
//! represented downstream as NaN on the affected field; errors here exist
//! only at the driver boundary, where a bus-level failure still has a
//! cause worth logging.
//!
//! Design constraints (shared with the rest of the core):
//!
//! 1. **Small Size**: variants carry at most a `&'static str`, so errors
//!    stay cheap to return from the acquisition path.
//! 2. **No Heap Allocation**: no `String`, deterministic memory usage.
//! 3. **Copy Semantics**: errors implement `Copy` for friction-free
//!    propagation with `?`.
//!
//! Whatever the cause, the acquisition layer collapses a driver error to
//! `None` for the affected field and moves on; there are no retries
//! within a cycle.

use thiserror_no_std::Error;

/// Result type for sensor driver operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Sensor driver errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The sensor did not answer within its protocol timing window
    #[error("Sensor timed out waiting for {phase}")]
    Timeout {
        /// Which protocol phase timed out (wake, response, bit read)
        phase: &'static str,
    },

    /// Frame arrived but its checksum does not match the payload
    #[error("Frame checksum mismatch: got {got:#04x}, expected {expected:#04x}")]
    ChecksumMismatch {
        /// Checksum byte received on the wire
        got: u8,
        /// Checksum recomputed from the payload bytes
        expected: u8,
    },

    /// The bus returned a frame of the wrong length
    #[error("Short frame: {len} bytes")]
    ShortFrame {
        /// Number of bytes actually received
        len: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Timeout { phase } =>
                defmt::write!(fmt, "Sensor timeout during {}", phase),
            Self::ChecksumMismatch { got, expected } =>
                defmt::write!(fmt, "Checksum {} != {}", got, expected),
            Self::ShortFrame { len } =>
                defmt::write!(fmt, "Short frame: {} bytes", len),
        }
    }
}
