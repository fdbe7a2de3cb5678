//! Shaping inputs and schedules.

use std::fmt;

use knit_gauge::{Length, Unit, Warning};
use serde::{Deserialize, Serialize};

/// Input to the shaping calculator.
///
/// `rows_per_unit` and `unit` describe the gauge context. They only feed the
/// informational [`ShapingSchedule::shaping_length`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapingInput {
    pub starting_stitch_count: u32,
    pub target_stitch_count: u32,
    pub total_rows_for_shaping: u32,
    pub stitches_per_shaping_event: u32,
    pub rows_per_unit: f64,
    pub unit: Unit,
}

impl ShapingInput {
    pub fn new(
        starting_stitch_count: u32,
        target_stitch_count: u32,
        total_rows_for_shaping: u32,
        stitches_per_shaping_event: u32,
        rows_per_unit: f64,
        unit: Unit,
    ) -> Self {
        Self {
            starting_stitch_count,
            target_stitch_count,
            total_rows_for_shaping,
            stitches_per_shaping_event,
            rows_per_unit,
            unit,
        }
    }
}

/// Whether stitches are added or removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShapingDirection {
    Increase,
    Decrease,
}

impl ShapingDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapingDirection::Increase => "Increase",
            ShapingDirection::Decrease => "Decrease",
        }
    }

    /// Apply `stitches` of this shaping to a running count.
    pub fn apply(&self, count: u32, stitches: u32) -> u32 {
        match self {
            ShapingDirection::Increase => count + stitches,
            ShapingDirection::Decrease => count.saturating_sub(stitches),
        }
    }
}

impl fmt::Display for ShapingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Plain,
    Shaping,
}

/// One line of the row-by-row instructions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShapingStep {
    /// Zero-based row at which this step starts.
    pub row_offset: u32,
    /// Rows this step consumes.
    pub rows: u32,
    pub kind: StepKind,
    pub instruction: String,
    /// Stitch count after a shaping row; `None` for plain rows.
    pub stitch_count: Option<u32>,
}

/// `times` consecutive intervals of `rows` rows each, ending in a shaping row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntervalRun {
    pub rows: u32,
    pub times: u32,
}

/// A fully scheduled increase or decrease.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShapingEvent {
    pub direction: ShapingDirection,
    pub total_stitches_to_change: u32,
    pub stitches_per_event: u32,
    pub event_count: u32,
    pub simple_instruction: String,
    pub steps: Vec<ShapingStep>,
    /// Interval runs in the order they are worked.
    pub intervals: Vec<IntervalRun>,
    pub final_stitch_count: u32,
}

impl ShapingEvent {
    /// Total rows covered by the intervals.
    pub fn scheduled_rows(&self) -> u32 {
        self.intervals.iter().map(|run| run.rows * run.times).sum()
    }

    pub fn shaping_steps(&self) -> impl Iterator<Item = &ShapingStep> {
        self.steps.iter().filter(|s| s.kind == StepKind::Shaping)
    }
}

/// Result of a shaping calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShapingSchedule {
    pub has_shaping: bool,
    pub total_shaping_rows: u32,
    pub event: Option<ShapingEvent>,
    /// Approximate physical length the shaping rows span.
    pub shaping_length: Length,
    pub warnings: Vec<Warning>,
}

impl ShapingSchedule {
    /// Schedule for a piece whose stitch count does not change.
    pub fn unshaped(unit: Unit) -> Self {
        Self {
            has_shaping: false,
            total_shaping_rows: 0,
            event: None,
            shaping_length: Length::new(0.0, unit),
            warnings: Vec::new(),
        }
    }

    pub fn summary(&self) -> Option<&str> {
        self.event.as_ref().map(|e| e.simple_instruction.as_str())
    }

    pub fn event_count(&self) -> u32 {
        self.event.as_ref().map_or(0, |e| e.event_count)
    }
}
