//! Resize requests and their typed, per-family interpretation.

use std::collections::BTreeMap;

use knit_gauge::{
    rows_to_length, stitches_to_length, Gauge, GaugeSpec, Length, Unit, ValidationReport,
};
use serde::{Deserialize, Serialize};

use crate::template::ShapeFamily;

/// A request to rescale a pattern to a new gauge and/or size.
///
/// `target` values are lengths in the new gauge's unit. A missing target
/// dimension keeps the original pattern's size, derived from the matching
/// original count at the original gauge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeRequest {
    pub template: String,
    pub original_gauge: GaugeSpec,
    pub new_gauge: GaugeSpec,
    #[serde(default)]
    pub original: BTreeMap<String, f64>,
    #[serde(default)]
    pub target: BTreeMap<String, f64>,
}

impl ResizeRequest {
    pub fn new(
        template: impl Into<String>,
        original_gauge: GaugeSpec,
        new_gauge: GaugeSpec,
    ) -> Self {
        Self {
            template: template.into(),
            original_gauge,
            new_gauge,
            original: BTreeMap::new(),
            target: BTreeMap::new(),
        }
    }

    pub fn with_original(mut self, field: impl Into<String>, value: f64) -> Self {
        self.original.insert(field.into(), value);
        self
    }

    pub fn with_target(mut self, field: impl Into<String>, value: f64) -> Self {
        self.target.insert(field.into(), value);
        self
    }
}

/// Original-pattern values a tapered resize carries over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaperOriginal {
    pub narrow_stitches: u32,
    pub wide_stitches: u32,
    pub stitches_per_shaping_event: u32,
}

impl TaperOriginal {
    /// Wide-to-narrow stitch ratio of the original pattern.
    pub fn ratio(&self) -> f64 {
        f64::from(self.wide_stitches) / f64::from(self.narrow_stitches)
    }
}

/// Validated dimensions for one shape family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeSpec {
    Rectangular {
        width: Length,
        length: Length,
    },
    Tapered {
        narrow_width: Length,
        wide_width: Length,
        length: Length,
        original: TaperOriginal,
    },
    Cylindrical {
        circumference: Length,
        height: Length,
    },
}

impl ShapeSpec {
    pub fn family(&self) -> ShapeFamily {
        match self {
            ShapeSpec::Rectangular { .. } => ShapeFamily::Rectangular,
            ShapeSpec::Tapered { .. } => ShapeFamily::Tapered,
            ShapeSpec::Cylindrical { .. } => ShapeFamily::Cylindrical,
        }
    }

    /// Read the fields `family` needs from `request`, recording one error per bad field.
    ///
    /// `original_gauge` is only used to derive dimensions the request leaves out;
    /// when it is `None` its own errors have already been recorded.
    pub fn parse(
        family: ShapeFamily,
        request: &ResizeRequest,
        original_gauge: Option<&Gauge>,
        target_unit: Unit,
        report: &mut ValidationReport,
    ) -> Option<Self> {
        let mut fields = FieldReader {
            request,
            original_gauge,
            target_unit,
            report,
            counts: BTreeMap::new(),
        };

        match family {
            ShapeFamily::Rectangular => {
                let width = fields.width("width", "stitches");
                let length = fields.height("length", "rows");
                Some(ShapeSpec::Rectangular {
                    width: width?,
                    length: length?,
                })
            }
            ShapeFamily::Tapered => {
                let narrow = fields.required_count("narrow_stitches");
                let wide = fields.required_count("wide_stitches");
                let per_event = fields.required_count("stitches_per_shaping_event");
                let narrow_width = fields.width("narrow_width", "narrow_stitches");
                let wide_width = fields.width("wide_width", "wide_stitches");
                let length = fields.height("length", "rows");
                Some(ShapeSpec::Tapered {
                    narrow_width: narrow_width?,
                    wide_width: wide_width?,
                    length: length?,
                    original: TaperOriginal {
                        narrow_stitches: narrow?,
                        wide_stitches: wide?,
                        stitches_per_shaping_event: per_event?,
                    },
                })
            }
            ShapeFamily::Cylindrical => {
                let circumference = fields.width("circumference", "stitches");
                let height = fields.height("height", "rows");
                Some(ShapeSpec::Cylindrical {
                    circumference: circumference?,
                    height: height?,
                })
            }
        }
    }
}

struct FieldReader<'a> {
    request: &'a ResizeRequest,
    original_gauge: Option<&'a Gauge>,
    target_unit: Unit,
    report: &'a mut ValidationReport,
    // Each original count is validated once, however many dimensions use it.
    counts: BTreeMap<String, Option<u32>>,
}

#[derive(Clone, Copy)]
enum Axis {
    Stitches,
    Rows,
}

impl FieldReader<'_> {
    fn original_count(&mut self, field: &str) -> Option<u32> {
        if let Some(cached) = self.counts.get(field) {
            return *cached;
        }
        let value = self.request.original.get(field).copied();
        let count = self
            .report
            .optional_positive(&format!("original {}", field), value)
            .and_then(|value| self.whole(field, value));
        self.counts.insert(field.to_string(), count);
        count
    }

    fn required_count(&mut self, field: &str) -> Option<u32> {
        let value = self.request.original.get(field).copied();
        let count = self
            .report
            .require_positive(&format!("original {}", field), value)
            .and_then(|value| self.whole(field, value));
        self.counts.insert(field.to_string(), count);
        count
    }

    fn whole(&mut self, field: &str, value: f64) -> Option<u32> {
        if value.fract() != 0.0 || value > f64::from(u32::MAX) {
            self.report
                .add_error(format!("original {} must be a whole number", field));
            return None;
        }
        Some(value as u32)
    }

    fn width(&mut self, target: &str, original: &str) -> Option<Length> {
        self.dimension(target, original, Axis::Stitches)
    }

    fn height(&mut self, target: &str, original: &str) -> Option<Length> {
        self.dimension(target, original, Axis::Rows)
    }

    fn dimension(&mut self, target: &str, original: &str, axis: Axis) -> Option<Length> {
        if let Some(value) = self.request.target.get(target).copied() {
            let value = self.report.require_positive(&format!("target {}", target), Some(value))?;
            return Some(Length::new(value, self.target_unit));
        }

        // Keep the original size when only the original count is known.
        let Some(count) = self.original_count(original) else {
            if !self.request.original.contains_key(original) {
                self.report.add_error(format!(
                    "target {} is required (or provide original {})",
                    target, original
                ));
            }
            return None;
        };
        let gauge = self.original_gauge?;
        let length = match axis {
            Axis::Stitches => stitches_to_length(count, gauge),
            Axis::Rows => rows_to_length(count, gauge),
        };
        Some(length.to(self.target_unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge_spec(stitches: f64, rows: f64, unit: Unit) -> GaugeSpec {
        GaugeSpec {
            stitches_per_swatch: Some(stitches),
            rows_per_swatch: Some(rows),
            swatch_width: Some(10.0),
            swatch_height: Some(10.0),
            unit,
        }
    }

    fn parse(
        family: ShapeFamily,
        request: &ResizeRequest,
    ) -> (Option<ShapeSpec>, ValidationReport) {
        let mut report = ValidationReport::new();
        let gauge = Gauge::square(20.0, 28.0, 10.0, Unit::Cm).unwrap();
        let spec = ShapeSpec::parse(family, request, Some(&gauge), Unit::Cm, &mut report);
        (spec, report)
    }

    #[test]
    fn test_rectangular_from_targets() {
        let request = ResizeRequest::new(
            "scarf",
            gauge_spec(20.0, 28.0, Unit::Cm),
            gauge_spec(16.0, 22.0, Unit::Cm),
        )
            .with_target("width", 25.0)
            .with_target("length", 150.0);

        let (spec, report) = parse(ShapeFamily::Rectangular, &request);
        assert!(report.valid);
        assert_eq!(
            spec.unwrap(),
            ShapeSpec::Rectangular {
                width: Length::cm(25.0),
                length: Length::cm(150.0),
            }
        );
    }

    #[test]
    fn test_missing_target_falls_back_to_original_size() {
        let request = ResizeRequest::new(
            "hat",
            gauge_spec(20.0, 28.0, Unit::Cm),
            gauge_spec(16.0, 22.0, Unit::Cm),
        )
            .with_original("stitches", 100.0)
            .with_target("height", 20.0);

        let (spec, report) = parse(ShapeFamily::Cylindrical, &request);
        assert!(report.valid, "{:?}", report.errors);
        match spec.unwrap() {
            ShapeSpec::Cylindrical { circumference, .. } => {
                assert_eq!(circumference, Length::cm(50.0))
            }
            other => panic!("unexpected spec: {:?}", other),
        }
    }

    #[test]
    fn test_every_bad_field_is_reported() {
        let request = ResizeRequest::new("sleeve", GaugeSpec::default(), GaugeSpec::default())
            .with_original("narrow_stitches", 40.5)
            .with_target("length", -3.0);

        let (spec, report) = parse(ShapeFamily::Tapered, &request);
        assert!(spec.is_none());
        let has = |message: &str| report.errors.iter().any(|e| e == message);
        assert!(has("original narrow_stitches must be a whole number"));
        assert!(has("original wide_stitches is required"));
        assert!(has("original stitches_per_shaping_event is required"));
        assert!(report
            .errors
            .iter()
            .any(|e| e.starts_with("target length must be a positive number")));
        let whole_number_errors = report
            .errors
            .iter()
            .filter(|e| e.contains("whole number"))
            .count();
        assert_eq!(whole_number_errors, 1);
    }

    #[test]
    fn test_taper_ratio() {
        let original = TaperOriginal {
            narrow_stitches: 40,
            wide_stitches: 60,
            stitches_per_shaping_event: 2,
        };
        assert!((original.ratio() - 1.5).abs() < 1e-12);
    }
}
