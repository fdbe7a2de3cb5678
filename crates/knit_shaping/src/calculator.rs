//! Even distribution of shaping rows.
//!
//! With `events` shaping rows over `rows` rows, every interval is either
//! `rows / events` or one row longer; the `rows % events` longer intervals are
//! worked first. Each interval ends on its shaping row.

use knit_gauge::{Length, Warning};
use tracing::{debug, info, warn};

use crate::config::ShapingLimits;
use crate::error::{ShapingError, ShapingResult};
use crate::instruction;
use crate::schedule::{
    IntervalRun, ShapingDirection, ShapingEvent, ShapingInput, ShapingSchedule, ShapingStep,
    StepKind,
};

/// Shaping distribution calculator.
#[derive(Debug, Clone, Default)]
pub struct ShapingCalculator {
    limits: ShapingLimits,
}

/// Calculate a schedule with the default limits.
pub fn calculate_shaping(input: &ShapingInput) -> ShapingResult<ShapingSchedule> {
    ShapingCalculator::new().calculate(input)
}

impl ShapingCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ShapingLimits) -> Self {
        Self { limits }
    }

    /// Validate an input, returning one message per offending field.
    pub fn validate(&self, input: &ShapingInput) -> Vec<String> {
        let mut errors = Vec::new();

        let counts = [
            ("starting stitch count", input.starting_stitch_count),
            ("target stitch count", input.target_stitch_count),
            ("total rows for shaping", input.total_rows_for_shaping),
            ("stitches per shaping event", input.stitches_per_shaping_event),
        ];
        for (field, value) in counts {
            if value == 0 {
                errors.push(format!("{} must be a positive whole number", field));
            }
        }

        if !input.rows_per_unit.is_finite() || input.rows_per_unit <= 0.0 {
            errors.push("rows per unit must be a positive number".to_string());
        }

        errors
    }

    /// Produce the shaping schedule for `input`.
    pub fn calculate(&self, input: &ShapingInput) -> ShapingResult<ShapingSchedule> {
        let errors = self.validate(input);
        if !errors.is_empty() {
            return Err(ShapingError::Validation(errors));
        }

        let start = input.starting_stitch_count;
        let target = input.target_stitch_count;
        let rows = input.total_rows_for_shaping;
        let per_event = input.stitches_per_shaping_event;

        if start == target {
            debug!("Stitch count unchanged at {}, no shaping needed", start);
            return Ok(ShapingSchedule::unshaped(input.unit));
        }

        let total = start.abs_diff(target);
        let direction = if target > start {
            ShapingDirection::Increase
        } else {
            ShapingDirection::Decrease
        };
        let event_count = total.div_ceil(per_event);

        if event_count > rows {
            return Err(ShapingError::NotEnoughRows {
                events: event_count,
                rows,
            });
        }

        let base = rows / event_count;
        let remainder = rows % event_count;
        let intervals = interval_runs(base, remainder, event_count);
        debug!(
            "Distributing {} {} events over {} rows: {:?}",
            event_count,
            direction,
            rows,
            intervals
        );

        let (steps, final_stitch_count) =
            build_steps(&intervals, direction, start, total, per_event);
        let simple_instruction = instruction::summary(direction, per_event, &intervals);

        let warnings = self.check_plausibility(input, total);
        for warning in &warnings {
            warn!("{}", warning);
        }

        info!("{}", simple_instruction);

        Ok(ShapingSchedule {
            has_shaping: true,
            total_shaping_rows: rows,
            event: Some(ShapingEvent {
                direction,
                total_stitches_to_change: total,
                stitches_per_event: per_event,
                event_count,
                simple_instruction,
                steps,
                intervals,
                final_stitch_count,
            }),
            shaping_length: Length::new(f64::from(rows) / input.rows_per_unit, input.unit),
            warnings,
        })
    }

    fn check_plausibility(&self, input: &ShapingInput, total: u32) -> Vec<Warning> {
        let mut warnings = Vec::new();

        if input.total_rows_for_shaping > self.limits.max_plausible_rows {
            warnings.push(Warning::ImplausibleRowCount {
                rows: input.total_rows_for_shaping,
                max: self.limits.max_plausible_rows,
            });
        }

        if total > input.starting_stitch_count {
            warnings.push(Warning::ChangeExceedsStart {
                change: total,
                starting: input.starting_stitch_count,
            });
        }

        warnings
    }
}

// Longer intervals first. A remainder means base < rows, so base + 1 fits.
fn interval_runs(base: u32, remainder: u32, event_count: u32) -> Vec<IntervalRun> {
    let mut runs = Vec::with_capacity(2);
    if remainder > 0 {
        runs.push(IntervalRun {
            rows: base + 1,
            times: remainder,
        });
    }
    runs.push(IntervalRun {
        rows: base,
        times: event_count - remainder,
    });
    runs
}

fn build_steps(
    intervals: &[IntervalRun],
    direction: ShapingDirection,
    start: u32,
    total: u32,
    per_event: u32,
) -> (Vec<ShapingStep>, u32) {
    let mut steps = Vec::new();
    let mut row_offset = 0;
    let mut count = start;
    let mut remaining = total;

    for run in intervals {
        for _ in 0..run.times {
            if run.rows > 1 {
                let plain = run.rows - 1;
                steps.push(ShapingStep {
                    row_offset,
                    rows: plain,
                    kind: StepKind::Plain,
                    instruction: instruction::plain_rows(plain),
                    stitch_count: None,
                });
                row_offset += plain;
            }

            // The last event may change fewer stitches when the total is not a multiple.
            let change = per_event.min(remaining);
            remaining -= change;
            count = direction.apply(count, change);

            steps.push(ShapingStep {
                row_offset,
                rows: 1,
                kind: StepKind::Shaping,
                instruction: instruction::shaping_row(row_offset + 1, direction, change, count),
                stitch_count: Some(count),
            });
            row_offset += 1;
        }
    }

    (steps, count)
}
