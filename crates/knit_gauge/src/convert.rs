//! Length ⇄ stitch/row conversions.
//!
//! Rates are `count / swatch dimension` in the gauge's unit. A [`Length`] in
//! another unit is converted into the gauge's unit before multiplying, and
//! every count is rounded half away from zero.

use crate::gauge::Gauge;
use crate::unit::{Length, Unit, CM_PER_INCH};

/// Convert a raw measurement between units.
pub fn convert_unit(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Cm, Unit::Inch) => value / CM_PER_INCH,
        (Unit::Inch, Unit::Cm) => value * CM_PER_INCH,
        (Unit::Cm, Unit::Cm) | (Unit::Inch, Unit::Inch) => value,
    }
}

/// Number of stitches needed to span `length` at this gauge.
pub fn length_to_stitches(length: Length, gauge: &Gauge) -> u32 {
    round_count(length.value_in(gauge.unit()) * gauge.stitches_per_unit())
}

/// Number of rows needed to span `length` at this gauge.
pub fn length_to_rows(length: Length, gauge: &Gauge) -> u32 {
    round_count(length.value_in(gauge.unit()) * gauge.rows_per_unit())
}

/// Physical width of `count` stitches, in the gauge's unit.
pub fn stitches_to_length(count: u32, gauge: &Gauge) -> Length {
    Length::new(f64::from(count) / gauge.stitches_per_unit(), gauge.unit())
}

/// Physical height of `count` rows, in the gauge's unit.
pub fn rows_to_length(count: u32, gauge: &Gauge) -> Length {
    Length::new(f64::from(count) / gauge.rows_per_unit(), gauge.unit())
}

// Negative and non-finite products clamp to zero; `as` saturates at u32::MAX.
fn round_count(raw: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    raw.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge_cm() -> Gauge {
        Gauge::square(20.0, 28.0, 10.0, Unit::Cm).unwrap()
    }

    #[test]
    fn test_convert_unit() {
        assert_eq!(convert_unit(2.54, Unit::Cm, Unit::Inch), 1.0);
        assert_eq!(convert_unit(1.0, Unit::Inch, Unit::Cm), 2.54);
        assert_eq!(convert_unit(7.0, Unit::Cm, Unit::Cm), 7.0);
    }

    #[test]
    fn test_length_to_stitches() {
        let gauge = gauge_cm();
        assert_eq!(length_to_stitches(Length::cm(50.0), &gauge), 100);
        assert_eq!(length_to_stitches(Length::cm(10.0), &gauge), 20);
    }

    #[test]
    fn test_length_to_rows() {
        let gauge = gauge_cm();
        assert_eq!(length_to_rows(Length::cm(20.0), &gauge), 56);
        // 2.8 rows/cm * 5.1 cm = 14.28
        assert_eq!(length_to_rows(Length::cm(5.1), &gauge), 14);
    }

    #[test]
    fn test_rounding_is_half_up_for_positive_values() {
        // 2 sts/cm * 10.25 cm = 20.5
        let gauge = gauge_cm();
        assert_eq!(length_to_stitches(Length::cm(10.25), &gauge), 21);
    }

    #[test]
    fn test_inch_length_with_cm_gauge() {
        let gauge = gauge_cm();
        // 4 in = 10.16 cm -> 20.32 sts
        assert_eq!(length_to_stitches(Length::inches(4.0), &gauge), 20);
    }

    #[test]
    fn test_negative_length_clamps_to_zero() {
        let gauge = gauge_cm();
        assert_eq!(length_to_stitches(Length::cm(-5.0), &gauge), 0);
    }

    #[test]
    fn test_stitches_and_rows_to_length() {
        let gauge = gauge_cm();
        assert_eq!(stitches_to_length(100, &gauge), Length::cm(50.0));
        let height = rows_to_length(28, &gauge);
        assert_eq!(height.unit, Unit::Cm);
        assert!((height.value - 10.0).abs() < 1e-9);
    }
}
