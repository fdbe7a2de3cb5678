//! Resize tolerances.

use knit_gauge::Unit;
use serde::{Deserialize, Serialize};

/// Thresholds that turn a resize result into a warning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeTolerances {
    /// Allowed difference between desired and achieved dimensions, in cm.
    pub drift_cm: f64,
    /// Allowed difference between desired and achieved dimensions, in inches.
    pub drift_inch: f64,
    /// Relative stitch density change above which the gauge change is flagged.
    pub gauge_change_ratio: f64,
    /// Relative change of the taper ratio above which the silhouette is flagged.
    pub silhouette_change_ratio: f64,
}

impl Default for ResizeTolerances {
    fn default() -> Self {
        Self {
            drift_cm: 2.0,
            drift_inch: 0.8,
            gauge_change_ratio: 0.20,
            silhouette_change_ratio: 0.30,
        }
    }
}

impl ResizeTolerances {
    /// Drift tolerance for measurements expressed in `unit`.
    pub fn drift(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Cm => self.drift_cm,
            Unit::Inch => self.drift_inch,
        }
    }
}
