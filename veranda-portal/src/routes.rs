//! HTTP Route Dispatch
//!
//! The station serves six read-only endpoints:
//!
//! | Path           | Body                                        |
//! |----------------|---------------------------------------------|
//! | `/`            | index page (HTML, placeholders resolved)    |
//! | `/temperature` | latest temperature as text, or `N/A`        |
//! | `/humidity`    | latest humidity as text, or `N/A`           |
//! | `/measuretime` | wall-clock stamp of the latest acquisition  |
//! | `/refreshtime` | current wall-clock time, read live          |
//! | `/readings`    | the whole latest sample as JSON             |
//!
//! Dispatch is pure: path in, [`Response`] out, reading the sample store
//! and the wall clock. Handlers never trigger an acquisition and never
//! mutate anything: `/refreshtime` reads the clock's current state
//! without refreshing it (the sampling loop owns refreshes). Whatever
//! server loop embeds this (async on-device, a test harness on the host)
//! only moves bytes.

use veranda_core::{SampleStore, WallClock};

use crate::render;

/// One of the station's endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`, the HTML index page
    Index,
    /// `/temperature`, latest temperature as plain text
    Temperature,
    /// `/humidity`, latest humidity as plain text
    Humidity,
    /// `/measuretime`, stamp of the latest acquisition as plain text
    MeasureTime,
    /// `/refreshtime`, live wall-clock time as plain text
    RefreshTime,
    /// `/readings`, the latest sample as JSON
    Readings,
}

impl Route {
    /// Map a request path to a route, `None` for anything unknown
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Index),
            "/temperature" => Some(Self::Temperature),
            "/humidity" => Some(Self::Humidity),
            "/measuretime" => Some(Self::MeasureTime),
            "/refreshtime" => Some(Self::RefreshTime),
            "/readings" => Some(Self::Readings),
            _ => None,
        }
    }
}

/// A fully composed response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// MIME type of the body
    pub content_type: &'static str,
    /// The body itself
    pub body: String,
}

impl Response {
    fn text(body: String) -> Self {
        Self {
            content_type: "text/plain",
            body,
        }
    }

    fn html(body: String) -> Self {
        Self {
            content_type: "text/html",
            body,
        }
    }

    fn json(body: String) -> Self {
        Self {
            content_type: "application/json",
            body,
        }
    }
}

/// Serve one request against the latest sample and the wall clock
///
/// Returns `None` for paths the station does not serve; the embedding
/// turns that into its 404.
pub fn handle(path: &str, store: &SampleStore, clock: &impl WallClock) -> Option<Response> {
    let route = Route::from_path(path)?;
    let sample = store.read();

    let response = match route {
        Route::Index => Response::html(render::render_index(&sample, clock)),
        Route::Temperature => Response::text(render::reading_text(sample.temperature_c)),
        Route::Humidity => Response::text(render::reading_text(sample.humidity_pct)),
        Route::MeasureTime => Response::text(sample.taken_at.as_str().to_string()),
        Route::RefreshTime => Response::text(clock.formatted_time().as_str().to_string()),
        // Serializing a Sample cannot fail: plain floats and a string.
        // NaN fields come out as JSON null, which is the right wire
        // representation of "no valid reading".
        Route::Readings => Response::json(serde_json::to_string(&sample).unwrap_or_default()),
    };

    Some(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veranda_core::{ManualClock, RawReading, Sample, SampleStore, TimeText};

    fn stamped(t: Option<f32>, h: Option<f32>, stamp: &str) -> Sample {
        let mut text = TimeText::new();
        text.push_str(stamp).unwrap();
        Sample::compose(
            RawReading {
                temperature_c: t,
                humidity_pct: h,
            },
            text,
        )
    }

    #[test]
    fn unknown_paths_are_not_served() {
        let store = SampleStore::new();
        let clock = ManualClock::unsynced();
        assert!(handle("/admin", &store, &clock).is_none());
        assert!(handle("/temperature/raw", &store, &clock).is_none());
    }

    #[test]
    fn text_endpoints_render_the_latest_sample() {
        let mut store = SampleStore::new();
        store.publish(stamped(Some(22.5), Some(55.0), "12:30:00"));
        let clock = ManualClock::at(12, 30, 45);

        let t = handle("/temperature", &store, &clock).unwrap();
        assert_eq!(t.content_type, "text/plain");
        assert_eq!(t.body, "22.50");

        assert_eq!(handle("/humidity", &store, &clock).unwrap().body, "55.00");
        assert_eq!(
            handle("/measuretime", &store, &clock).unwrap().body,
            "12:30:00"
        );
    }

    #[test]
    fn refreshtime_reads_the_clock_live() {
        let mut store = SampleStore::new();
        store.publish(stamped(Some(22.5), Some(55.0), "12:30:00"));
        let clock = ManualClock::at(12, 31, 7);

        // Independent of the acquisition stamp
        assert_eq!(
            handle("/refreshtime", &store, &clock).unwrap().body,
            "12:31:07"
        );
    }

    #[test]
    fn failed_fields_serve_na_before_and_after_first_sample() {
        let store = SampleStore::new();
        let clock = ManualClock::unsynced();

        // Before any acquisition: startup sample is all-NaN
        assert_eq!(handle("/temperature", &store, &clock).unwrap().body, "N/A");
        assert_eq!(handle("/measuretime", &store, &clock).unwrap().body, "");

        // After an acquisition with a failed humidity read
        let mut store = store;
        store.publish(stamped(Some(21.0), None, "06:00:01"));
        assert_eq!(handle("/temperature", &store, &clock).unwrap().body, "21.00");
        assert_eq!(handle("/humidity", &store, &clock).unwrap().body, "N/A");
    }

    #[test]
    fn index_serves_html_with_placeholders_resolved() {
        let mut store = SampleStore::new();
        store.publish(stamped(Some(22.5), Some(55.0), "12:30:00"));
        let clock = ManualClock::at(12, 30, 45);

        let page = handle("/", &store, &clock).unwrap();
        assert_eq!(page.content_type, "text/html");
        assert!(page.body.contains("22.50"));
        assert!(!page.body.contains("%TEMPERATURE%"));
    }

    #[test]
    fn readings_endpoint_serves_the_sample_as_json() {
        let mut store = SampleStore::new();
        store.publish(stamped(Some(22.5), Some(55.0), "12:30:00"));
        let clock = ManualClock::at(12, 30, 45);

        let json = handle("/readings", &store, &clock).unwrap();
        assert_eq!(json.content_type, "application/json");

        let parsed: serde_json::Value = serde_json::from_str(&json.body).unwrap();
        assert_eq!(parsed["temperature_c"], 22.5);
        assert_eq!(parsed["humidity_pct"], 55.0);
        assert_eq!(parsed["taken_at"], "12:30:00");
        assert!(parsed["sound_speed_m_per_s"].as_f64().unwrap() > 345.0);
    }

    #[test]
    fn readings_json_encodes_failed_fields_as_null() {
        let mut store = SampleStore::new();
        store.publish(stamped(None, Some(55.0), "12:30:00"));
        let clock = ManualClock::unsynced();

        let json = handle("/readings", &store, &clock).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json.body).unwrap();
        assert!(parsed["temperature_c"].is_null());
        assert!(parsed["heat_index_c"].is_null());
        assert_eq!(parsed["humidity_pct"], 55.0);
    }
}
