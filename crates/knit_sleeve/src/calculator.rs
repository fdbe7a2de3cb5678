//! Hammer-sleeve geometry.
//!
//! The sleeve cap's vertical part and the body panel's armhole cutout form the
//! join edge, so their widths and depths must come out identical. The two
//! sides are counted independently and then compared.

use knit_gauge::{
    length_to_rows, length_to_stitches, rows_to_length, stitches_to_length, Gauge, JoinEdge,
    Length, ValidationReport, Warning,
};
use tracing::{debug, info, warn};

use crate::config::SleeveLimits;
use crate::error::{SleeveError, SleeveResult};
use crate::input::HammerSleeveInput;
use crate::result::{
    AchievedDimensions, BodyPanelShaping, HammerSleeveResult, SleeveCapExtension,
    SleeveCapVerticalPart,
};

const EPSILON: f64 = 1e-9;

/// Hammer-sleeve calculator.
#[derive(Debug, Clone, Default)]
pub struct HammerSleeveCalculator {
    limits: SleeveLimits,
}

/// Calculate a hammer-sleeve layout with the default limits.
pub fn calculate_hammer_sleeve(input: &HammerSleeveInput) -> SleeveResult<HammerSleeveResult> {
    HammerSleeveCalculator::new().calculate(input)
}

// Validated measurements, all in the gauge's unit.
struct Measurements {
    gauge: Gauge,
    upper_arm_width: Length,
    armhole_depth: Length,
    neckline_width: Length,
    extension_width: Length,
}

impl HammerSleeveCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SleeveLimits) -> Self {
        Self { limits }
    }

    /// Validate an input: field errors plus range warnings.
    pub fn validate(&self, input: &HammerSleeveInput) -> ValidationReport {
        self.check(input).1
    }

    pub fn calculate(&self, input: &HammerSleeveInput) -> SleeveResult<HammerSleeveResult> {
        let (measurements, report) = self.check(input);
        let m = match measurements {
            Some(m) if report.valid => m,
            _ => return Err(SleeveError::Validation(report.errors)),
        };
        let gauge = &m.gauge;

        let extension = SleeveCapExtension {
            width_stitches: length_to_stitches(m.extension_width, gauge),
            length_rows: self.limits.extension_rows,
        };
        let vertical = SleeveCapVerticalPart {
            width_stitches: length_to_stitches(m.upper_arm_width, gauge),
            height_rows: length_to_rows(m.armhole_depth, gauge),
        };
        let body = body_panel(&m, vertical.width_stitches)?;
        debug!(
            "Extension {:?}, vertical part {:?}, body {:?}",
            extension, vertical, body
        );

        let mut warnings = report.warnings;
        warnings.extend(check_join(&vertical, &body));

        let shoulder_stitches =
            both_sides("shoulder width", body.shoulder_strap_width, extension.width_stitches)?;
        let achieved = AchievedDimensions {
            shoulder_width: stitches_to_length(shoulder_stitches, gauge),
            extension_width: stitches_to_length(extension.width_stitches, gauge),
            upper_arm_width: stitches_to_length(vertical.width_stitches, gauge),
            armhole_depth: rows_to_length(vertical.height_rows, gauge),
        };

        for warning in &warnings {
            warn!("{}", warning);
        }
        info!(
            "Hammer sleeve: {} extension stitches, cap {} x {} rows, chest {} stitches",
            extension.width_stitches,
            vertical.width_stitches,
            vertical.height_rows,
            body.total_body_width_at_chest
        );

        Ok(HammerSleeveResult {
            component: input.component,
            sleeve_cap_extension: extension,
            sleeve_cap_vertical_part: vertical,
            body_panel_shaping: body,
            achieved,
            warnings,
        })
    }

    fn check(&self, input: &HammerSleeveInput) -> (Option<Measurements>, ValidationReport) {
        let mut report = ValidationReport::new();

        let gauge = input.gauge.check("gauge", &mut report);
        let shoulder = positive(&mut report, "total shoulder width", input.total_shoulder_width);
        let upper_arm = positive(&mut report, "upper arm width", input.upper_arm_width);
        let armhole = positive(&mut report, "armhole depth", input.armhole_depth);
        let neckline = positive(&mut report, "neckline width", input.neckline_width);

        let (Some(gauge), Some(shoulder), Some(upper_arm), Some(armhole), Some(neckline)) =
            (gauge, shoulder, upper_arm, armhole, neckline)
        else {
            return (None, report);
        };

        let unit = gauge.unit();
        let shoulder = shoulder.to(unit);
        let upper_arm = upper_arm.to(unit);
        let armhole = armhole.to(unit);
        let neckline = neckline.to(unit);

        if neckline.value >= shoulder.value {
            report.add_error(format!(
                "neckline width ({}) must be less than total shoulder width ({})",
                neckline, shoulder
            ));
            return (None, report);
        }

        let extension = (shoulder - neckline) / 2.0;
        let (min, max) = self.limits.extension_range(unit);
        if extension.value < min.value - EPSILON {
            report.add_error(format!(
                "shoulder extension width ({}) is below the minimum of {}",
                extension, min
            ));
        } else if extension.value > max.value + EPSILON {
            report.add_warning(Warning::ExtensionTooWide {
                width: extension,
                max,
            });
        }

        let (min, max) = self.limits.upper_arm_range(unit);
        if !within(upper_arm, min, max) {
            report.add_warning(Warning::UpperArmOutOfRange {
                width: upper_arm,
                min,
                max,
            });
        }

        let (min, max) = self.limits.armhole_depth_range(unit);
        if !within(armhole, min, max) {
            report.add_warning(Warning::ArmholeDepthOutOfRange {
                depth: armhole,
                min,
                max,
            });
        }

        let measurements = Measurements {
            gauge,
            upper_arm_width: upper_arm,
            armhole_depth: armhole,
            neckline_width: neckline,
            extension_width: extension,
        };
        (Some(measurements), report)
    }
}

/// Compare the two sides of the join edge. Mismatches are reported, never corrected.
pub fn check_join(vertical: &SleeveCapVerticalPart, body: &BodyPanelShaping) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if vertical.width_stitches != body.armhole_cutout_width {
        warnings.push(Warning::JoinMismatch {
            edge: JoinEdge::Width,
            sleeve: vertical.width_stitches,
            body: body.armhole_cutout_width,
        });
    }
    if vertical.height_rows != body.armhole_depth_rows {
        warnings.push(Warning::JoinMismatch {
            edge: JoinEdge::Height,
            sleeve: vertical.height_rows,
            body: body.armhole_depth_rows,
        });
    }

    warnings
}

fn body_panel(m: &Measurements, cutout_width: u32) -> SleeveResult<BodyPanelShaping> {
    let strap = length_to_stitches(m.neckline_width / 2.0, &m.gauge);

    Ok(BodyPanelShaping {
        shoulder_strap_width: strap,
        armhole_cutout_width: cutout_width,
        armhole_depth_rows: length_to_rows(m.armhole_depth, &m.gauge),
        bind_off_stitches: cutout_width,
        total_body_width_at_chest: both_sides("total body width at chest", strap, cutout_width)?,
    })
}

// Stitch total of a piece mirrored on both sides: 2 * (a + b).
fn both_sides(what: &str, a: u32, b: u32) -> SleeveResult<u32> {
    a.checked_add(b)
        .and_then(|half| half.checked_mul(2))
        .ok_or_else(|| {
            SleeveError::Validation(vec![format!(
                "{} exceeds the largest supported stitch count ({})",
                what,
                u32::MAX
            )])
        })
}

fn positive(report: &mut ValidationReport, field: &str, length: Length) -> Option<Length> {
    report
        .require_positive(field, Some(length.value))
        .map(|_| length)
}

fn within(value: Length, min: Length, max: Length) -> bool {
    value.value >= min.value - EPSILON && value.value <= max.value + EPSILON
}
