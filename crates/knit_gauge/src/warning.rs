//! Structured, non-fatal diagnostics.
//!
//! Calculators attach these alongside successful results. The `Display`
//! implementation gives the default English wording; callers that localise
//! should match on the variant instead of parsing the text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::unit::{format_amount, Length, Unit};

/// Which edge of the hammer-sleeve join disagreed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JoinEdge {
    Width,
    Height,
}

impl fmt::Display for JoinEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinEdge::Width => write!(f, "width"),
            JoinEdge::Height => write!(f, "height"),
        }
    }
}

/// A warning produced alongside a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Rounded counts produce a dimension noticeably different from the target.
    RoundingDrift {
        axis: String,
        desired: Length,
        achieved: Length,
        delta: f64,
    },
    /// Stitch density changed by more than the configured ratio.
    GaugeChangeLarge { percent: f64 },
    /// Finished circumference moved enough to change how the piece fits.
    EaseFit { desired: Length, achieved: Length },
    /// Ratio of end widths moved enough to change the silhouette.
    SilhouetteChange {
        original_ratio: f64,
        new_ratio: f64,
        percent: f64,
    },
    /// New measurements in `from` were calculated against an original gauge in `to`.
    UnitConversion { from: Unit, to: Unit },
    ImplausibleRowCount { rows: u32, max: u32 },
    ChangeExceedsStart { change: u32, starting: u32 },
    ExtensionTooWide { width: Length, max: Length },
    UpperArmOutOfRange { width: Length, min: Length, max: Length },
    ArmholeDepthOutOfRange { depth: Length, min: Length, max: Length },
    /// Sleeve cap and body cutout disagree after rounding.
    JoinMismatch { edge: JoinEdge, sleeve: u32, body: u32 },
}

impl Warning {
    /// Stable identifier of the warning kind, matching the serialised tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Warning::RoundingDrift { .. } => "rounding_drift",
            Warning::GaugeChangeLarge { .. } => "gauge_change_large",
            Warning::EaseFit { .. } => "ease_fit",
            Warning::SilhouetteChange { .. } => "silhouette_change",
            Warning::UnitConversion { .. } => "unit_conversion",
            Warning::ImplausibleRowCount { .. } => "implausible_row_count",
            Warning::ChangeExceedsStart { .. } => "change_exceeds_start",
            Warning::ExtensionTooWide { .. } => "extension_too_wide",
            Warning::UpperArmOutOfRange { .. } => "upper_arm_out_of_range",
            Warning::ArmholeDepthOutOfRange { .. } => "armhole_depth_out_of_range",
            Warning::JoinMismatch { .. } => "join_mismatch",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::RoundingDrift {
                axis,
                desired,
                achieved,
                delta,
            } => write!(
                f,
                "Achieved {} is {} instead of {} (off by {} {})",
                axis,
                achieved,
                desired,
                format_amount(*delta),
                achieved.unit.abbreviation()
            ),
            Warning::GaugeChangeLarge { percent } => write!(
                f,
                "Stitch gauge changes by {}%; drape and fabric density may differ noticeably",
                format_amount(*percent)
            ),
            Warning::EaseFit { desired, achieved } => write!(
                f,
                "Circumference of {} differs from the intended {}; check the ease before casting on",
                achieved, desired
            ),
            Warning::SilhouetteChange {
                original_ratio,
                new_ratio,
                percent,
            } => write!(
                f,
                "Taper ratio changes from {} to {} ({}%); the silhouette will differ from the original",
                format_amount(*original_ratio),
                format_amount(*new_ratio),
                format_amount(*percent)
            ),
            Warning::UnitConversion { from, to } => write!(
                f,
                "Measurements were converted from {} to {} for calculation; results are shown in {}",
                from, to, from
            ),
            Warning::ImplausibleRowCount { rows, max } => write!(
                f,
                "{} rows of shaping is unusually long (more than {}); check the row count",
                rows, max
            ),
            Warning::ChangeExceedsStart { change, starting } => write!(
                f,
                "Changing {} stitches is more than the {} starting stitches; check the stitch counts",
                change, starting
            ),
            Warning::ExtensionTooWide { width, max } => write!(
                f,
                "Shoulder extension of {} is wider than the usual maximum of {}",
                width, max
            ),
            Warning::UpperArmOutOfRange { width, min, max } => write!(
                f,
                "Upper arm width of {} is outside the typical range {} to {}",
                width, min, max
            ),
            Warning::ArmholeDepthOutOfRange { depth, min, max } => write!(
                f,
                "Armhole depth of {} is outside the typical range {} to {}",
                depth, min, max
            ),
            Warning::JoinMismatch { edge, sleeve, body } => write!(
                f,
                "Sleeve cap {} ({}) does not match the body cutout {} ({})",
                edge, sleeve, edge, body
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_serializes_with_kind_tag() {
        let warning = Warning::GaugeChangeLarge { percent: 23.4 };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "gauge_change_large");
        assert_eq!(json["percent"], 23.4);
        assert_eq!(warning.kind(), "gauge_change_large");
    }

    #[test]
    fn test_rounding_drift_display() {
        let warning = Warning::RoundingDrift {
            axis: "width".to_string(),
            desired: Length::cm(50.0),
            achieved: Length::cm(47.5),
            delta: 2.5,
        };
        assert_eq!(
            warning.to_string(),
            "Achieved width is 47.5 cm instead of 50 cm (off by 2.5 cm)"
        );
    }

    #[test]
    fn test_join_mismatch_display_names_both_values() {
        let warning = Warning::JoinMismatch {
            edge: JoinEdge::Height,
            sleeve: 56,
            body: 55,
        };
        let text = warning.to_string();
        assert!(text.contains("56"));
        assert!(text.contains("55"));
    }
}
