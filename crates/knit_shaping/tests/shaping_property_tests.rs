//! Property-based and scenario tests for the shaping calculator.

use knit_gauge::Unit;
use knit_shaping::{
    calculate_shaping, ShapingDirection, ShapingError, ShapingInput, StepKind,
};
use proptest::prelude::*;

fn input(start: u32, target: u32, rows: u32, per_event: u32) -> ShapingInput {
    ShapingInput::new(start, target, rows, per_event, 3.0, Unit::Cm)
}

proptest! {
    #[test]
    fn unchanged_stitch_count_never_shapes(
        count in 1u32..400,
        rows in 1u32..600,
        per_event in 1u32..8,
    ) {
        let schedule = calculate_shaping(&input(count, count, rows, per_event)).unwrap();
        prop_assert!(!schedule.has_shaping);
        prop_assert!(schedule.event.is_none());
        prop_assert_eq!(schedule.event_count(), 0);
    }

    #[test]
    fn too_few_rows_always_fails(
        start in 1u32..400,
        target in 1u32..400,
        per_event in 1u32..6,
        rows_seed in 0u32..1000,
    ) {
        let events = start.abs_diff(target).div_ceil(per_event);
        prop_assume!(events > 1);
        let rows = 1 + rows_seed % (events - 1);

        let result = calculate_shaping(&input(start, target, rows, per_event));
        prop_assert_eq!(result.unwrap_err(), ShapingError::NotEnoughRows { events, rows });
    }

    #[test]
    fn intervals_use_exactly_the_row_budget(
        start in 1u32..300,
        target in 1u32..300,
        per_event in 1u32..6,
        extra_rows in 0u32..300,
    ) {
        prop_assume!(start != target);
        let events = start.abs_diff(target).div_ceil(per_event);
        let rows = events + extra_rows;

        let schedule = calculate_shaping(&input(start, target, rows, per_event)).unwrap();
        let event = schedule.event.as_ref().unwrap();
        let base = rows / events;

        let times_at = |interval: u32| -> u32 {
            event
                .intervals
                .iter()
                .filter(|r| r.rows == interval)
                .map(|r| r.times)
                .sum()
        };
        let shorter = times_at(base);
        let longer = times_at(base + 1);

        prop_assert_eq!(shorter * base + longer * (base + 1), rows);
        prop_assert_eq!(shorter + longer, event.event_count);
        prop_assert_eq!(event.scheduled_rows(), rows);
        prop_assert_eq!(event.event_count, events);
    }

    #[test]
    fn steps_are_ordered_and_within_budget(
        start in 1u32..200,
        target in 1u32..200,
        per_event in 1u32..5,
        extra_rows in 0u32..200,
    ) {
        prop_assume!(start != target);
        let rows = start.abs_diff(target).div_ceil(per_event) + extra_rows;

        let schedule = calculate_shaping(&input(start, target, rows, per_event)).unwrap();
        let event = schedule.event.unwrap();

        let offsets: Vec<u32> = event.steps.iter().map(|s| s.row_offset).collect();
        prop_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(*offsets.last().unwrap() <= rows);

        let consumed: u32 = event.steps.iter().map(|s| s.rows).sum();
        prop_assert_eq!(consumed, rows);
        prop_assert_eq!(event.final_stitch_count, target);
        prop_assert_eq!(
            event.steps.iter().filter(|s| s.kind == StepKind::Shaping).count() as u32,
            event.event_count
        );
    }
}

#[test]
fn test_decrease_scenario() {
    let schedule = calculate_shaping(&input(60, 40, 60, 2)).unwrap();
    let event = schedule.event.unwrap();

    assert_eq!(event.direction, ShapingDirection::Decrease);
    assert_eq!(event.event_count, 10);
    assert_eq!(event.simple_instruction, "Decrease 2 stitches every 6th row, 10 times.");
}

#[test]
fn test_increase_scenario() {
    let schedule = calculate_shaping(&input(30, 50, 55, 2)).unwrap();
    let event = schedule.event.unwrap();

    assert_eq!(event.direction, ShapingDirection::Increase);
    assert_eq!(event.event_count, 10);
    assert_eq!(
        event.simple_instruction,
        "Increase 2 stitches every 5th row 5 times, then every 6th row 5 times."
    );
}

#[test]
fn test_schedule_serializes_for_display_layer() {
    let schedule = calculate_shaping(&input(30, 50, 55, 2)).unwrap();
    let json = serde_json::to_value(&schedule).unwrap();

    assert_eq!(json["has_shaping"], true);
    assert_eq!(json["total_shaping_rows"], 55);
    assert_eq!(json["event"]["direction"], "increase");
    assert_eq!(json["event"]["steps"][0]["kind"], "plain");
}
