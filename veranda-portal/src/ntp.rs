//! SNTP Wall Clock
//!
//! Implements the core's `WallClock` over a plain UDP exchange with an
//! NTP pool: one 48-byte client packet out, the server's transmit
//! timestamp back. That is the whole protocol surface the station needs:
//! no poll intervals negotiated, no clock discipline, no fractional
//! seconds (the display is second-granular).
//!
//! ## Behavior
//!
//! - `refresh()` is called once per acquisition cycle but only goes out
//!   to the network when the update interval (default 60 s) has elapsed
//!   since the last attempt; in between, the clock freewheels on the
//!   host's monotonic timer from the last synced epoch.
//! - A failed exchange is logged and swallowed: the clock keeps its last
//!   state, and `formatted_time()` keeps reporting from it. Until the
//!   first successful sync it reports empty text, which the presentation
//!   layer renders as an absent timestamp.
//! - The configured zone offset is applied at render time, so a change
//!   of offset does not require a resync.

use std::net::UdpSocket;
use std::time::{Duration, Instant};

use thiserror::Error;

use veranda_core::constants::time::{
    NTP_DEFAULT_OFFSET_S, NTP_DEFAULT_POOL, NTP_UNIX_EPOCH_DELTA_S, NTP_UPDATE_INTERVAL_MS,
};
use veranda_core::{TimeOfDay, TimeText, WallClock};

/// Size of an SNTP packet without extensions
const PACKET_LEN: usize = 48;

/// Byte offset of the server transmit timestamp's seconds field
const TRANSMIT_SECONDS_OFFSET: usize = 40;

/// Errors from one SNTP exchange
#[derive(Debug, Error)]
pub enum NtpError {
    /// Socket-level failure (bind, send, receive, timeout)
    #[error("NTP socket error: {0}")]
    Io(#[from] std::io::Error),

    /// The server answered with fewer bytes than a full packet
    #[error("Short NTP response: {len} bytes")]
    ShortPacket {
        /// Number of bytes received
        len: usize,
    },

    /// Kiss-of-death or unsynchronized server (stratum 0)
    #[error("NTP server not usable (stratum 0)")]
    BadStratum,
}

/// SNTP client configuration
#[derive(Debug, Clone)]
pub struct NtpConfig {
    /// Pool hostname to query
    pub pool: String,
    /// UDP port, 123 unless testing against a local server
    pub port: u16,
    /// Zone offset applied at render time (seconds east of UTC)
    pub offset_s: i64,
    /// Minimum interval between network exchanges (ms)
    pub update_interval_ms: u32,
    /// Socket receive timeout for one exchange
    pub timeout: Duration,
}

impl Default for NtpConfig {
    fn default() -> Self {
        Self {
            pool: NTP_DEFAULT_POOL.to_string(),
            port: 123,
            offset_s: NTP_DEFAULT_OFFSET_S,
            update_interval_ms: NTP_UPDATE_INTERVAL_MS,
            timeout: Duration::from_secs(2),
        }
    }
}

/// Build the client request packet
///
/// First byte 0xE3: leap indicator 3 (unsynchronized, since we are
/// asking),
/// version 4, mode 3 (client). Everything else zero; the server fills
/// in the rest.
pub fn client_packet() -> [u8; PACKET_LEN] {
    let mut packet = [0u8; PACKET_LEN];
    packet[0] = 0b1110_0011;
    packet
}

/// Extract the transmit timestamp from a server response as a Unix epoch
///
/// Seconds live at bytes 40..44, big-endian, in the NTP era (1900);
/// the era delta converts to Unix. The fractional word is ignored;
/// second resolution is all the station renders.
pub fn transmit_epoch_seconds(response: &[u8]) -> Result<u64, NtpError> {
    if response.len() < PACKET_LEN {
        return Err(NtpError::ShortPacket {
            len: response.len(),
        });
    }
    if response[1] == 0 {
        return Err(NtpError::BadStratum);
    }

    let ntp_seconds = u32::from_be_bytes([
        response[TRANSMIT_SECONDS_OFFSET],
        response[TRANSMIT_SECONDS_OFFSET + 1],
        response[TRANSMIT_SECONDS_OFFSET + 2],
        response[TRANSMIT_SECONDS_OFFSET + 3],
    ]) as u64;

    Ok(ntp_seconds.saturating_sub(NTP_UNIX_EPOCH_DELTA_S))
}

/// Wall clock synchronized over SNTP
pub struct NtpClock {
    config: NtpConfig,
    /// Last synced Unix epoch and the monotonic instant it was taken
    anchor: Option<(u64, Instant)>,
    last_attempt: Option<Instant>,
}

impl NtpClock {
    /// Create a clock with the default pool and offsets
    pub fn new() -> Self {
        Self::with_config(NtpConfig::default())
    }

    /// Create a clock with explicit configuration
    pub fn with_config(config: NtpConfig) -> Self {
        Self {
            config,
            anchor: None,
            last_attempt: None,
        }
    }

    /// True once at least one exchange has succeeded
    pub fn is_synced(&self) -> bool {
        self.anchor.is_some()
    }

    /// Perform one SNTP exchange and re-anchor the clock
    fn sync(&mut self) -> Result<(), NtpError> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.set_read_timeout(Some(self.config.timeout))?;
        socket.connect((self.config.pool.as_str(), self.config.port))?;

        socket.send(&client_packet())?;

        let mut response = [0u8; PACKET_LEN];
        let len = socket.recv(&mut response)?;
        let epoch = transmit_epoch_seconds(&response[..len])?;

        self.anchor = Some((epoch, Instant::now()));
        log::debug!("NTP sync: epoch {epoch} from {}", self.config.pool);
        Ok(())
    }

    /// Current local epoch from the anchor plus freewheel time
    fn local_epoch(&self) -> Option<u64> {
        let (epoch, at) = self.anchor?;
        let now = epoch + at.elapsed().as_secs();
        Some(now.saturating_add_signed(self.config.offset_s))
    }
}

impl Default for NtpClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for NtpClock {
    fn refresh(&mut self) {
        let interval = Duration::from_millis(self.config.update_interval_ms as u64);
        if let Some(last) = self.last_attempt {
            if last.elapsed() < interval {
                return;
            }
        }

        self.last_attempt = Some(Instant::now());
        if let Err(e) = self.sync() {
            // Offline is normal; keep the last state and try again later
            log::warn!("NTP refresh failed: {e}");
        }
    }

    fn formatted_time(&self) -> TimeText {
        match self.local_epoch() {
            Some(epoch) => TimeOfDay::from_epoch_seconds(epoch).as_text(),
            None => TimeText::new(),
        }
    }
}
