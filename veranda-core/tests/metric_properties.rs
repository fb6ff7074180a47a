//! Property tests for the derived metrics and the store round trip.

use proptest::prelude::*;

use veranda_core::{metrics, RawReading, Sample, SampleStore, TimeText};

proptest! {
    #[test]
    fn metrics_are_pure_functions(
        t in -40.0f32..80.0,
        h in 0.0f32..100.0,
    ) {
        prop_assert_eq!(
            metrics::heat_index(t, h).to_bits(),
            metrics::heat_index(t, h).to_bits()
        );
        prop_assert_eq!(
            metrics::sound_speed(t, h).to_bits(),
            metrics::sound_speed(t, h).to_bits()
        );
    }

    #[test]
    fn valid_inputs_yield_finite_metrics(
        t in -40.0f32..80.0,
        h in 0.0f32..100.0,
    ) {
        prop_assert!(metrics::heat_index(t, h).is_finite());
        prop_assert!(metrics::sound_speed(t, h).is_finite());
    }

    #[test]
    fn nan_temperature_poisons_metrics_for_any_humidity(h in 0.0f32..100.0) {
        prop_assert!(metrics::heat_index(f32::NAN, h).is_nan());
        prop_assert!(metrics::sound_speed(f32::NAN, h).is_nan());
    }

    #[test]
    fn sound_speed_rises_with_temperature(
        t in -40.0f32..79.0,
        h in 0.0f32..100.0,
    ) {
        prop_assert!(metrics::sound_speed(t + 1.0, h) > metrics::sound_speed(t, h));
    }

    #[test]
    fn store_round_trip_is_field_exact(
        t in proptest::option::of(-40.0f32..80.0),
        h in proptest::option::of(0.0f32..100.0),
    ) {
        let mut stamp = TimeText::new();
        stamp.push_str("23:59:59").unwrap();
        let sample = Sample::compose(
            RawReading { temperature_c: t, humidity_pct: h },
            stamp,
        );

        let mut store = SampleStore::new();
        store.publish(sample.clone());
        let got = store.read();

        prop_assert_eq!(got.temperature_c.to_bits(), sample.temperature_c.to_bits());
        prop_assert_eq!(got.humidity_pct.to_bits(), sample.humidity_pct.to_bits());
        prop_assert_eq!(got.heat_index_c.to_bits(), sample.heat_index_c.to_bits());
        prop_assert_eq!(
            got.sound_speed_m_per_s.to_bits(),
            sample.sound_speed_m_per_s.to_bits()
        );
        prop_assert_eq!(got.taken_at, sample.taken_at);
    }
}
