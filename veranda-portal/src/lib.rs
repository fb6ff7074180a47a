//! Presentation and network-time boundary for the veranda station
//!
//! The measurement core publishes one latest sample; this crate turns it
//! into what the outside world sees:
//!
//! - [`routes`]: the station's five HTTP endpoints plus a JSON snapshot,
//!   as pure request-path → response dispatch. The socket loop itself is
//!   the embedding's business; everything here is host-testable.
//! - [`render`]: reading-to-text rules ("N/A" for a NaN field, two
//!   decimals otherwise) and the `%NAME%` placeholder substitution the
//!   index page uses.
//! - [`ntp`]: an SNTP client implementing the core's `WallClock`,
//!   rate-limited and silent on network failure.
//!
//! Rendering NaN placeholders is this crate's job by contract: the core
//! never substitutes a default for a failed reading, and the portal is
//! where "no valid reading" becomes something a human can look at.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod ntp;
pub mod render;
pub mod routes;

pub use ntp::{NtpClock, NtpConfig, NtpError};
pub use render::{fill_placeholders, reading_text, INDEX_HTML};
pub use routes::{handle, Response, Route};
