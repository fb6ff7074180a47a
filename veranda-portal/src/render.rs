//! Reading-to-Text Rendering
//!
//! The display rules for the whole station live here:
//!
//! - a numeric field renders with two decimals;
//! - a NaN field renders as the literal `"N/A"`, the core's "no valid
//!   reading" sentinel made human-readable, and deliberately not `0.00`;
//! - the index page is a template with `%NAME%` placeholders resolved
//!   against the latest sample at request time.

use veranda_core::{Sample, WallClock};

/// The station's index page
///
/// Placeholders are resolved by [`fill_placeholders`]; the inline script
/// re-polls the plain-text endpoints so the page stays live without
/// reloading.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>veranda</title>
  <style>
    body { font-family: sans-serif; text-align: center; }
    .reading { font-size: 2.5rem; }
    .unit { font-size: 1.2rem; color: #666; }
    footer { margin-top: 2rem; color: #888; }
  </style>
</head>
<body>
  <h1>veranda station</h1>
  <p><span class="reading" id="temperature">%TEMPERATURE%</span><span class="unit">&deg;C</span></p>
  <p><span class="reading" id="humidity">%HUMIDITY%</span><span class="unit">%</span></p>
  <footer>
    measured at <span id="measuretime">%MEASURETIME%</span>
    &middot; now <span id="refreshtime">%REFRESHTIME%</span>
  </footer>
  <script>
    const poll = (path, id, ms) => setInterval(async () => {
      document.getElementById(id).textContent = await (await fetch(path)).text();
    }, ms);
    poll('/temperature', 'temperature', 30000);
    poll('/humidity', 'humidity', 30000);
    poll('/measuretime', 'measuretime', 30000);
    poll('/refreshtime', 'refreshtime', 1000);
  </script>
</body>
</html>
"#;

/// Render one reading: two decimals, or `"N/A"` when the field is NaN
pub fn reading_text(value: f32) -> String {
    if value.is_nan() {
        "N/A".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Substitute `%NAME%` placeholders in a template
///
/// `resolve` maps a placeholder name (without the percent signs) to its
/// replacement; unknown names resolve to empty text. A `%` without a
/// closing partner is passed through verbatim.
pub fn fill_placeholders(template: &str, resolve: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.find('%') {
            Some(end) if after[..end].chars().all(|c| c.is_ascii_uppercase()) && end > 0 => {
                out.push_str(&resolve(&after[..end]));
                rest = &after[end + 1..];
            }
            _ => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Resolve the index page's placeholders against the latest sample
pub fn render_index(sample: &Sample, clock: &impl WallClock) -> String {
    fill_placeholders(INDEX_HTML, |name| match name {
        "TEMPERATURE" => reading_text(sample.temperature_c),
        "HUMIDITY" => reading_text(sample.humidity_pct),
        "MEASURETIME" => sample.taken_at.as_str().to_string(),
        "REFRESHTIME" => clock.formatted_time().as_str().to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use veranda_core::{ManualClock, RawReading, Sample, TimeText};

    #[test]
    fn valid_reading_renders_two_decimals() {
        assert_eq!(reading_text(22.5), "22.50");
        assert_eq!(reading_text(-3.125), "-3.13");
    }

    #[test]
    fn nan_renders_as_placeholder_not_zero() {
        assert_eq!(reading_text(f32::NAN), "N/A");
    }

    #[test]
    fn placeholders_are_substituted() {
        let out = fill_placeholders("t=%TEMP% h=%HUM%", |name| match name {
            "TEMP" => "21.00".into(),
            "HUM" => "55.00".into(),
            _ => String::new(),
        });
        assert_eq!(out, "t=21.00 h=55.00");
    }

    #[test]
    fn lone_percent_passes_through() {
        let out = fill_placeholders("55% of %X%", |_| "y".into());
        assert_eq!(out, "55% of y");
    }

    #[test]
    fn index_page_shows_na_for_failed_fields() {
        let mut stamp = TimeText::new();
        stamp.push_str("07:45:00").unwrap();
        let sample = Sample::compose(
            RawReading {
                temperature_c: None,
                humidity_pct: Some(55.0),
            },
            stamp,
        );
        let clock = ManualClock::at(7, 45, 30);

        let page = render_index(&sample, &clock);
        assert!(page.contains(">N/A<"));
        assert!(page.contains(">55.00<"));
        assert!(page.contains("07:45:00"));
        assert!(page.contains("07:45:30"));
        assert!(!page.contains("%TEMPERATURE%"));
    }
}
