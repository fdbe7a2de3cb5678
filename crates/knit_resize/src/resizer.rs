//! Gauge-based pattern resizing.
//!
//! All arithmetic happens in the original gauge's unit. When the new gauge
//! was measured in another unit, targets and the new gauge are converted
//! first and the achieved dimensions are converted back for display.

use knit_gauge::{
    convert_unit, length_to_rows, length_to_stitches, rows_to_length, stitches_to_length, Gauge,
    Length, Unit, ValidationReport, Warning,
};
use knit_shaping::{ShapingCalculator, ShapingInput, ShapingLimits, ShapingSchedule};
use tracing::{debug, info, warn};

use crate::config::ResizeTolerances;
use crate::error::{ResizeError, ResizerResult};
use crate::request::{ResizeRequest, ShapeSpec, TaperOriginal};
use crate::result::{ResizeOutputs, ResizeResult};
use crate::template::{Template, TemplateCatalog};

/// Resizes patterns between gauges and sizes.
#[derive(Debug, Clone)]
pub struct PatternResizer {
    catalog: TemplateCatalog,
    tolerances: ResizeTolerances,
    shaping: ShapingCalculator,
}

impl Default for PatternResizer {
    fn default() -> Self {
        Self {
            catalog: TemplateCatalog::builtin(),
            tolerances: ResizeTolerances::default(),
            shaping: ShapingCalculator::new(),
        }
    }
}

/// A request that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub template: Template,
    pub original_gauge: Gauge,
    pub new_gauge: Gauge,
    pub spec: ShapeSpec,
}

// Per-call state: working/display units, accumulated warnings, and targets
// that round to nothing.
struct Calculation<'a> {
    tolerances: &'a ResizeTolerances,
    working: Unit,
    display: Unit,
    gauge: Gauge,
    warnings: Vec<Warning>,
    errors: Vec<String>,
}

impl PatternResizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: TemplateCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_tolerances(mut self, tolerances: ResizeTolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    pub fn with_shaping_limits(mut self, limits: ShapingLimits) -> Self {
        self.shaping = ShapingCalculator::with_limits(limits);
        self
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Check every field of `request` before any calculation runs.
    pub fn validate(&self, request: &ResizeRequest) -> ResizerResult<ValidatedRequest> {
        let template = self
            .catalog
            .get(&request.template)
            .ok_or_else(|| ResizeError::UnknownTemplate(request.template.clone()))?;

        let mut report = ValidationReport::new();
        let original_gauge = request.original_gauge.check("original gauge", &mut report);
        let new_gauge = request.new_gauge.check("new gauge", &mut report);
        let spec = ShapeSpec::parse(
            template.family,
            request,
            original_gauge.as_ref(),
            request.new_gauge.unit,
            &mut report,
        );

        match (original_gauge, new_gauge, spec) {
            (Some(original_gauge), Some(new_gauge), Some(spec)) if report.valid => {
                Ok(ValidatedRequest {
                    template: template.clone(),
                    original_gauge,
                    new_gauge,
                    spec,
                })
            }
            _ => Err(ResizeError::Validation(report.errors)),
        }
    }

    /// Recompute stitch and row counts for `request`.
    pub fn resize(&self, request: &ResizeRequest) -> ResizerResult<ResizeResult> {
        let validated = self.validate(request)?;
        let template = &validated.template;
        info!("Resizing '{}' as a {} shape", template.id, template.family);

        let working = validated.original_gauge.unit();
        let display = validated.new_gauge.unit();
        let mut calc = Calculation {
            tolerances: &self.tolerances,
            working,
            display,
            gauge: validated.new_gauge.in_unit(working),
            warnings: Vec::new(),
            errors: Vec::new(),
        };

        if display != working {
            calc.warnings.push(Warning::UnitConversion {
                from: display,
                to: working,
            });
        }
        calc.check_gauge_change(&validated.original_gauge);

        let outputs = match validated.spec {
            ShapeSpec::Rectangular { width, length } => {
                let (stitches, achieved_width) = calc.stitches("width", width);
                let (rows, achieved_length) = calc.rows("length", length);
                calc.ensure_counts()?;
                ResizeOutputs::Rectangular {
                    stitches,
                    rows,
                    achieved_width,
                    achieved_length,
                }
            }
            ShapeSpec::Tapered {
                narrow_width,
                wide_width,
                length,
                original,
            } => self.resize_taper(&mut calc, narrow_width, wide_width, length, original)?,
            ShapeSpec::Cylindrical {
                circumference,
                height,
            } => {
                let drift_before = calc.warnings.len();
                let (stitches, achieved_circumference) =
                    calc.stitches("circumference", circumference);
                if calc.warnings.len() > drift_before {
                    calc.warnings.push(Warning::EaseFit {
                        desired: circumference,
                        achieved: achieved_circumference,
                    });
                }
                let (rows, achieved_height) = calc.rows("height", height);
                calc.ensure_counts()?;
                ResizeOutputs::Cylindrical {
                    stitches,
                    rows,
                    achieved_circumference,
                    achieved_height,
                }
            }
        };

        for warning in &calc.warnings {
            warn!("{}", warning);
        }

        Ok(ResizeResult {
            template: template.id.clone(),
            family: template.family,
            unit: display,
            outputs,
            warnings: calc.warnings,
        })
    }

    fn resize_taper(
        &self,
        calc: &mut Calculation<'_>,
        narrow_width: Length,
        wide_width: Length,
        length: Length,
        original: TaperOriginal,
    ) -> ResizerResult<ResizeOutputs> {
        let (narrow_stitches, achieved_narrow_width) = calc.stitches("narrow width", narrow_width);
        let (wide_stitches, achieved_wide_width) = calc.stitches("wide width", wide_width);
        let (rows, achieved_length) = calc.rows("length", length);
        calc.ensure_counts()?;

        let shaping = if narrow_stitches != wide_stitches {
            let input = ShapingInput::new(
                narrow_stitches,
                wide_stitches,
                rows,
                original.stitches_per_shaping_event,
                calc.gauge.rows_per_unit(),
                calc.working,
            );
            let mut schedule = self.shaping.calculate(&input)?;
            schedule.shaping_length = schedule.shaping_length.to(calc.display);
            calc.warnings.extend(schedule.warnings.iter().cloned());
            schedule
        } else {
            debug!("Taper ends match at {} stitches, no shaping", narrow_stitches);
            ShapingSchedule::unshaped(calc.display)
        };

        // Both ends are at least one stitch once counts are ensured.
        let new_ratio = f64::from(wide_stitches) / f64::from(narrow_stitches);
        let original_ratio = original.ratio();
        let shift = new_ratio / original_ratio - 1.0;
        if shift.abs() > calc.tolerances.silhouette_change_ratio {
            calc.warnings.push(Warning::SilhouetteChange {
                original_ratio,
                new_ratio,
                percent: shift * 100.0,
            });
        }

        Ok(ResizeOutputs::Tapered {
            narrow_stitches,
            wide_stitches,
            rows,
            achieved_narrow_width,
            achieved_wide_width,
            achieved_length,
            shaping,
        })
    }
}

impl Calculation<'_> {
    fn check_gauge_change(&mut self, original: &Gauge) {
        let ratio = self.gauge.stitches_per_unit() / original.stitches_per_unit();
        debug!("Stitch density ratio new/original: {:.3}", ratio);
        if (ratio - 1.0).abs() > self.tolerances.gauge_change_ratio {
            self.warnings.push(Warning::GaugeChangeLarge {
                percent: (ratio - 1.0) * 100.0,
            });
        }
    }

    /// Stitches for `desired`, plus the achieved width in the display unit.
    fn stitches(&mut self, axis: &str, desired: Length) -> (u32, Length) {
        let desired = desired.to(self.working);
        let count = length_to_stitches(desired, &self.gauge);
        if count == 0 {
            self.errors.push(format!(
                "target {} is smaller than one stitch at the new gauge",
                axis
            ));
        }
        let achieved = stitches_to_length(count, &self.gauge);
        debug!("{}: {} -> {} stitches ({})", axis, desired, count, achieved);
        self.check_drift(axis, desired, achieved);
        (count, achieved.to(self.display))
    }

    /// Rows for `desired`, plus the achieved height in the display unit.
    fn rows(&mut self, axis: &str, desired: Length) -> (u32, Length) {
        let desired = desired.to(self.working);
        let count = length_to_rows(desired, &self.gauge);
        if count == 0 {
            self.errors.push(format!(
                "target {} is smaller than one row at the new gauge",
                axis
            ));
        }
        let achieved = rows_to_length(count, &self.gauge);
        debug!("{}: {} -> {} rows ({})", axis, desired, count, achieved);
        self.check_drift(axis, desired, achieved);
        (count, achieved.to(self.display))
    }

    fn ensure_counts(&mut self) -> ResizerResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ResizeError::Validation(std::mem::take(&mut self.errors)))
        }
    }

    fn check_drift(&mut self, axis: &str, desired: Length, achieved: Length) {
        let delta = achieved.abs_diff(desired).value;
        // Tolerance comparison tolerates float noise from unit conversion.
        if delta > self.tolerances.drift(self.working) + 1e-9 {
            self.warnings.push(Warning::RoundingDrift {
                axis: axis.to_string(),
                desired: desired.to(self.display),
                achieved: achieved.to(self.display),
                delta: convert_unit(delta, self.working, self.display),
            });
        }
    }
}
