//! Physical Model Coefficients
//!
//! Coefficients for the two derived metrics the station reports: speed of
//! sound in humid air and the NOAA heat index. Values are from the
//! published models, not tunables.

// ===== SPEED OF SOUND IN AIR =====

/// Speed of sound in dry air at 0°C (m/s).
///
/// Base term of the linear approximation
/// `c = 331.4 + 0.606*T(°C) + 0.0124*RH(%)`.
///
/// Source: Bohn, "Environmental Effects on the Speed of Sound" (JAES 1988)
pub const SOUND_SPEED_BASE_M_PER_S: f32 = 331.4;

/// Temperature coefficient of the sound-speed model (m/s per °C).
///
/// Dominant term: air density falls as temperature rises.
///
/// Source: same linear approximation, valid for ordinary ambient ranges
pub const SOUND_SPEED_TEMP_COEFF: f32 = 0.606;

/// Humidity coefficient of the sound-speed model (m/s per %RH).
///
/// Small correction: water vapor is lighter than dry air.
///
/// Source: same linear approximation
pub const SOUND_SPEED_HUMIDITY_COEFF: f32 = 0.0124;

// ===== HEAT INDEX (ROTHFUSZ REGRESSION) =====

/// Threshold (°F) above which the full Rothfusz regression applies.
///
/// Below this the simple Steadman average is already within the
/// regression's own ±1.3°F error band, so the cheap formula is used.
///
/// Source: NWS Technical Attachment SR 90-23 (Rothfusz, 1990)
pub const HEAT_INDEX_SIMPLE_CUTOFF_F: f32 = 79.0;
