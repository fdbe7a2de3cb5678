//! Gauge value objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::convert_unit;
use crate::error::{GaugeError, GaugeResult};
use crate::unit::{format_amount, Unit};
use crate::validation::ValidationReport;

/// Stitches and rows produced over a measured swatch.
///
/// A `Gauge` can only be obtained through validation, so every field is
/// finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GaugeSpec", into = "GaugeSpec")]
pub struct Gauge {
    stitches_per_swatch: f64,
    rows_per_swatch: f64,
    swatch_width: f64,
    swatch_height: f64,
    unit: Unit,
}

/// Unvalidated gauge input, as entered by a user or read from a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GaugeSpec {
    #[serde(default, alias = "stitches")]
    pub stitches_per_swatch: Option<f64>,
    #[serde(default, alias = "rows")]
    pub rows_per_swatch: Option<f64>,
    #[serde(default)]
    pub swatch_width: Option<f64>,
    #[serde(default)]
    pub swatch_height: Option<f64>,
    #[serde(default)]
    pub unit: Unit,
}

impl GaugeSpec {
    /// Validate every field, recording one error per offending field under `label`.
    pub fn check(&self, label: &str, report: &mut ValidationReport) -> Option<Gauge> {
        let stitches = report.require_positive(
            &format!("{}: stitches per swatch", label),
            self.stitches_per_swatch,
        );
        let rows = report.require_positive(
            &format!("{}: rows per swatch", label),
            self.rows_per_swatch,
        );
        let width =
            report.require_positive(&format!("{}: swatch width", label), self.swatch_width);
        let height =
            report.require_positive(&format!("{}: swatch height", label), self.swatch_height);

        Some(Gauge {
            stitches_per_swatch: stitches?,
            rows_per_swatch: rows?,
            swatch_width: width?,
            swatch_height: height?,
            unit: self.unit,
        })
    }
}

impl TryFrom<GaugeSpec> for Gauge {
    type Error = GaugeError;

    fn try_from(spec: GaugeSpec) -> Result<Self, Self::Error> {
        let mut report = ValidationReport::new();
        match spec.check("gauge", &mut report) {
            Some(gauge) if report.valid => Ok(gauge),
            _ => Err(GaugeError::InvalidGauge(report.errors)),
        }
    }
}

impl From<Gauge> for GaugeSpec {
    fn from(gauge: Gauge) -> Self {
        Self {
            stitches_per_swatch: Some(gauge.stitches_per_swatch),
            rows_per_swatch: Some(gauge.rows_per_swatch),
            swatch_width: Some(gauge.swatch_width),
            swatch_height: Some(gauge.swatch_height),
            unit: gauge.unit,
        }
    }
}

impl Gauge {
    /// Create a gauge from a swatch measurement.
    pub fn new(
        stitches_per_swatch: f64,
        rows_per_swatch: f64,
        swatch_width: f64,
        swatch_height: f64,
        unit: Unit,
    ) -> GaugeResult<Self> {
        GaugeSpec {
            stitches_per_swatch: Some(stitches_per_swatch),
            rows_per_swatch: Some(rows_per_swatch),
            swatch_width: Some(swatch_width),
            swatch_height: Some(swatch_height),
            unit,
        }
        .try_into()
    }

    /// Create a gauge measured over a square swatch.
    pub fn square(stitches: f64, rows: f64, swatch_size: f64, unit: Unit) -> GaugeResult<Self> {
        Self::new(stitches, rows, swatch_size, swatch_size, unit)
    }

    pub fn stitches_per_swatch(&self) -> f64 {
        self.stitches_per_swatch
    }

    pub fn rows_per_swatch(&self) -> f64 {
        self.rows_per_swatch
    }

    pub fn swatch_width(&self) -> f64 {
        self.swatch_width
    }

    pub fn swatch_height(&self) -> f64 {
        self.swatch_height
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Stitches per single unit of width.
    pub fn stitches_per_unit(&self) -> f64 {
        self.stitches_per_swatch / self.swatch_width
    }

    /// Rows per single unit of height.
    pub fn rows_per_unit(&self) -> f64 {
        self.rows_per_swatch / self.swatch_height
    }

    /// The same gauge with its swatch dimensions expressed in `unit`.
    pub fn in_unit(&self, unit: Unit) -> Self {
        Self {
            swatch_width: convert_unit(self.swatch_width, self.unit, unit),
            swatch_height: convert_unit(self.swatch_height, self.unit, unit),
            unit,
            ..*self
        }
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sts × {} rows per {} × {} {}",
            format_amount(self.stitches_per_swatch),
            format_amount(self.rows_per_swatch),
            format_amount(self.swatch_width),
            format_amount(self.swatch_height),
            self.unit.abbreviation()
        )
    }
}
