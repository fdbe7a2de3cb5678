//! Resize results.

use std::collections::BTreeMap;
use std::fmt;

use knit_gauge::{Length, Unit, Warning};
use knit_shaping::ShapingSchedule;
use serde::{Deserialize, Serialize};

use crate::template::ShapeFamily;

/// Counts and achieved dimensions for one shape family.
///
/// Achieved lengths are recomputed from the rounded counts, so they show what
/// the knitter will actually get rather than the requested size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ResizeOutputs {
    Rectangular {
        stitches: u32,
        rows: u32,
        achieved_width: Length,
        achieved_length: Length,
    },
    Tapered {
        narrow_stitches: u32,
        wide_stitches: u32,
        rows: u32,
        achieved_narrow_width: Length,
        achieved_wide_width: Length,
        achieved_length: Length,
        shaping: ShapingSchedule,
    },
    Cylindrical {
        stitches: u32,
        rows: u32,
        achieved_circumference: Length,
        achieved_height: Length,
    },
}

/// A single named output value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputValue {
    Count(u32),
    Length(Length),
    Text(String),
}

impl fmt::Display for OutputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputValue::Count(n) => write!(f, "{}", n),
            OutputValue::Length(length) => write!(f, "{}", length),
            OutputValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Outcome of a successful resize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeResult {
    pub template: String,
    pub family: ShapeFamily,
    /// Unit the achieved dimensions are reported in (the new gauge's unit).
    pub unit: Unit,
    pub outputs: ResizeOutputs,
    pub warnings: Vec<Warning>,
}

impl ResizeResult {
    /// Outputs as a flat map of named values for display.
    pub fn named_outputs(&self) -> BTreeMap<&'static str, OutputValue> {
        let mut named = BTreeMap::new();

        match &self.outputs {
            ResizeOutputs::Rectangular {
                stitches,
                rows,
                achieved_width,
                achieved_length,
            } => {
                named.insert("cast_on_stitches", OutputValue::Count(*stitches));
                named.insert("rows", OutputValue::Count(*rows));
                named.insert("achieved_width", OutputValue::Length(*achieved_width));
                named.insert("achieved_length", OutputValue::Length(*achieved_length));
            }
            ResizeOutputs::Tapered {
                narrow_stitches,
                wide_stitches,
                rows,
                achieved_narrow_width,
                achieved_wide_width,
                achieved_length,
                shaping,
            } => {
                named.insert("narrow_stitches", OutputValue::Count(*narrow_stitches));
                named.insert("wide_stitches", OutputValue::Count(*wide_stitches));
                named.insert("rows", OutputValue::Count(*rows));
                named.insert("achieved_narrow_width", OutputValue::Length(*achieved_narrow_width));
                named.insert("achieved_wide_width", OutputValue::Length(*achieved_wide_width));
                named.insert("achieved_length", OutputValue::Length(*achieved_length));
                if let Some(summary) = shaping.summary() {
                    named.insert("shaping", OutputValue::Text(summary.to_string()));
                }
            }
            ResizeOutputs::Cylindrical {
                stitches,
                rows,
                achieved_circumference,
                achieved_height,
            } => {
                named.insert("cast_on_stitches", OutputValue::Count(*stitches));
                named.insert("rows", OutputValue::Count(*rows));
                named.insert(
                    "achieved_circumference",
                    OutputValue::Length(*achieved_circumference),
                );
                named.insert("achieved_height", OutputValue::Length(*achieved_height));
            }
        }

        named
    }

    pub fn has_warning(&self, kind: &str) -> bool {
        self.warnings.iter().any(|w| w.kind() == kind)
    }
}
