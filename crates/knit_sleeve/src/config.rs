//! Plausibility limits for hammer-sleeve measurements.

use knit_gauge::{Length, Unit};
use serde::{Deserialize, Serialize};

/// Adult-garment ranges, stored in centimetres and scaled to the gauge's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SleeveLimits {
    /// Extensions narrower than this cannot be knitted as a separate section.
    pub extension_min_cm: f64,
    pub extension_max_cm: f64,
    pub upper_arm_min_cm: f64,
    pub upper_arm_max_cm: f64,
    pub armhole_depth_min_cm: f64,
    pub armhole_depth_max_cm: f64,
    /// Rows worked for the shoulder extension, which is modelled as a rectangle.
    pub extension_rows: u32,
}

impl Default for SleeveLimits {
    fn default() -> Self {
        Self {
            extension_min_cm: 2.0,
            extension_max_cm: 20.0,
            upper_arm_min_cm: 20.0,
            upper_arm_max_cm: 60.0,
            armhole_depth_min_cm: 12.0,
            armhole_depth_max_cm: 35.0,
            extension_rows: 20,
        }
    }
}

impl SleeveLimits {
    pub fn extension_rows(mut self, rows: u32) -> Self {
        self.extension_rows = rows;
        self
    }

    pub fn extension_range(&self, unit: Unit) -> (Length, Length) {
        range(self.extension_min_cm, self.extension_max_cm, unit)
    }

    pub fn upper_arm_range(&self, unit: Unit) -> (Length, Length) {
        range(self.upper_arm_min_cm, self.upper_arm_max_cm, unit)
    }

    pub fn armhole_depth_range(&self, unit: Unit) -> (Length, Length) {
        range(self.armhole_depth_min_cm, self.armhole_depth_max_cm, unit)
    }
}

fn range(min_cm: f64, max_cm: f64, unit: Unit) -> (Length, Length) {
    (Length::cm(min_cm).to(unit), Length::cm(max_cm).to(unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_scale_to_inches() {
        let (min, max) = SleeveLimits::default().upper_arm_range(Unit::Inch);
        assert_eq!(min.unit, Unit::Inch);
        assert!((min.value - 20.0 / 2.54).abs() < 1e-9);
        assert!((max.value - 60.0 / 2.54).abs() < 1e-9);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let limits: SleeveLimits = serde_json::from_str(r#"{"extension_rows": 24}"#).unwrap();
        assert_eq!(limits.extension_rows, 24);
        assert_eq!(limits.extension_min_cm, 2.0);
    }
}
