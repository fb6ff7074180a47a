//! Derived Metrics
//!
//! Pure, stateless functions computing the two values the station reports
//! beyond the raw readings: the NOAA heat index and the speed of sound in
//! humid air. Both are deterministic in their inputs and have no failure
//! mode of their own: a NaN input flows through the arithmetic and
//! surfaces as a NaN output, which is exactly the "no valid reading"
//! sentinel the rest of the system expects. No clamping, no unit checks.

use libm::{fabsf, sqrtf};

use crate::constants::physics::{
    HEAT_INDEX_SIMPLE_CUTOFF_F, SOUND_SPEED_BASE_M_PER_S, SOUND_SPEED_HUMIDITY_COEFF,
    SOUND_SPEED_TEMP_COEFF,
};

/// Celsius to Fahrenheit
#[inline]
fn c_to_f(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

/// Fahrenheit to Celsius
#[inline]
fn f_to_c(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) / 1.8
}

/// Heat index (°C) from temperature (°C) and relative humidity (%)
///
/// Rothfusz regression (NWS SR 90-23), computed in Fahrenheit like the
/// published model and converted back. Below the regression's validity
/// cutoff the simple Steadman average is used; above it the full
/// polynomial applies, with the NWS low-humidity and high-humidity
/// adjustments.
///
/// A NaN input yields a NaN result: the comparison against the cutoff is
/// false for NaN, so the NaN from the simple formula passes straight
/// through.
pub fn heat_index(temperature_c: f32, humidity_pct: f32) -> f32 {
    let t = c_to_f(temperature_c);
    let rh = humidity_pct;

    // Steadman's simple average, good within the regression's own error
    // band at mild temperatures
    let mut hi = 0.5 * (t + 61.0 + (t - 68.0) * 1.2 + rh * 0.094);

    if hi > HEAT_INDEX_SIMPLE_CUTOFF_F {
        hi = -42.379
            + 2.04901523 * t
            + 10.14333127 * rh
            - 0.22475541 * t * rh
            - 0.00683783 * t * t
            - 0.05481717 * rh * rh
            + 0.00122874 * t * t * rh
            + 0.00085282 * t * rh * rh
            - 0.00000199 * t * t * rh * rh;

        if rh < 13.0 && (80.0..=112.0).contains(&t) {
            hi -= (13.0 - rh) * 0.25 * sqrtf((17.0 - fabsf(t - 95.0)) * 0.05882);
        } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
            hi += (rh - 85.0) * 0.1 * (87.0 - t) * 0.2;
        }
    }

    f_to_c(hi)
}

/// Speed of sound in air (m/s) from temperature (°C) and humidity (%)
///
/// Linear model `331.4 + 0.606*T + 0.0124*RH`, accurate to a few cm/s
/// over ordinary ambient conditions. NaN inputs propagate.
pub fn sound_speed(temperature_c: f32, humidity_pct: f32) -> f32 {
    SOUND_SPEED_BASE_M_PER_S
        + SOUND_SPEED_TEMP_COEFF * temperature_c
        + SOUND_SPEED_HUMIDITY_COEFF * humidity_pct
}
