//! Property-based tests for the gauge conversion primitives.

use knit_gauge::{
    convert_unit, length_to_rows, length_to_stitches, rows_to_length, stitches_to_length, Gauge,
    Length, Unit,
};
use proptest::prelude::*;

fn unit_strategy() -> impl Strategy<Value = Unit> {
    prop_oneof![Just(Unit::Cm), Just(Unit::Inch)]
}

/// Gauges in the range a hand knitter or crocheter might realistically measure.
fn gauge_strategy() -> impl Strategy<Value = Gauge> {
    (4.0f64..60.0, 4.0f64..80.0, 2.0f64..20.0, 2.0f64..20.0, unit_strategy()).prop_map(
        |(stitches, rows, width, height, unit)| {
            Gauge::new(stitches, rows, width, height, unit).expect("strategy yields valid gauges")
        },
    )
}

proptest! {
    #[test]
    fn stitch_round_trip_stays_within_one_stitch(x in 0.1f64..500.0, gauge in gauge_strategy()) {
        let length = Length::new(x, gauge.unit());
        let stitches = length_to_stitches(length, &gauge);
        let achieved = stitches_to_length(stitches, &gauge);
        let stitch_width = 1.0 / gauge.stitches_per_unit();

        prop_assert!((achieved.value - x).abs() <= stitch_width + 1e-9);
    }

    #[test]
    fn row_round_trip_stays_within_one_row(x in 0.1f64..500.0, gauge in gauge_strategy()) {
        let length = Length::new(x, gauge.unit());
        let rows = length_to_rows(length, &gauge);
        let achieved = rows_to_length(rows, &gauge);
        let row_height = 1.0 / gauge.rows_per_unit();

        prop_assert!((achieved.value - x).abs() <= row_height + 1e-9);
    }

    #[test]
    fn unit_conversion_round_trips(x in -1000.0f64..1000.0) {
        let there = convert_unit(x, Unit::Cm, Unit::Inch);
        let back = convert_unit(there, Unit::Inch, Unit::Cm);
        prop_assert!((back - x).abs() < 1e-9);
    }

    #[test]
    fn count_ignores_which_unit_the_length_uses(x in 1.0f64..300.0, gauge in gauge_strategy()) {
        let metric = Length::cm(x);
        let imperial = metric.to(Unit::Inch);
        let a = length_to_stitches(metric, &gauge);
        let b = length_to_stitches(imperial, &gauge);
        // Float noise may only move a value sitting exactly on a .5 boundary.
        prop_assert!(a.abs_diff(b) <= 1);
    }
}

#[test]
fn test_fifty_centimeter_panel() {
    let gauge = Gauge::square(20.0, 28.0, 10.0, Unit::Cm).unwrap();
    let stitches = length_to_stitches(Length::cm(50.0), &gauge);
    assert_eq!(stitches, 100);
    assert_eq!(stitches_to_length(stitches, &gauge), Length::cm(50.0));
}
