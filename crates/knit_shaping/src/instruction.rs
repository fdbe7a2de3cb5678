//! Human-readable shaping instructions.

use crate::schedule::{IntervalRun, ShapingDirection};

/// English ordinal of `n`: 1st, 2nd, 3rd, 4th, ..., 11th, 12th, 13th, 21st.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn plural(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

fn times(count: u32) -> String {
    plural(count, "time", "times")
}

fn every(interval: u32) -> String {
    if interval == 1 {
        "every row".to_string()
    } else {
        format!("every {} row", ordinal(interval))
    }
}

/// What to do on a single shaping row that changes `stitches` stitches.
pub fn shaping_action(direction: ShapingDirection, stitches: u32) -> String {
    match stitches {
        1 => format!("{} 1 stitch at beginning of row", direction),
        2 => format!("{} 1 stitch at beginning and end of row", direction),
        n => format!("{} {} stitches evenly across row", direction, n),
    }
}

pub fn plain_rows(rows: u32) -> String {
    format!("Work {} plain", plural(rows, "row", "rows"))
}

pub fn shaping_row(
    row_number: u32,
    direction: ShapingDirection,
    stitches: u32,
    count: u32,
) -> String {
    format!(
        "Row {}: {} ({})",
        row_number,
        shaping_action(direction, stitches),
        plural(count, "stitch", "stitches")
    )
}

/// One-line summary of a schedule's interval runs, shortest interval first.
pub fn summary(
    direction: ShapingDirection,
    stitches_per_event: u32,
    intervals: &[IntervalRun],
) -> String {
    let stitches = plural(stitches_per_event, "stitch", "stitches");

    match intervals {
        [run] => format!(
            "{} {} {}, {}.",
            direction,
            stitches,
            every(run.rows),
            times(run.times)
        ),
        runs => {
            let phrases: Vec<String> = runs
                .iter()
                .rev()
                .map(|run| format!("{} {}", every(run.rows), times(run.times)))
                .collect();
            format!("{} {} {}.", direction, stitches, phrases.join(", then "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (10, "10th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (101, "101st"),
            (111, "111th"),
            (112, "112th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected, "ordinal({})", n);
        }
    }

    #[test]
    fn test_shaping_action_wording() {
        assert_eq!(
            shaping_action(ShapingDirection::Decrease, 1),
            "Decrease 1 stitch at beginning of row"
        );
        assert_eq!(
            shaping_action(ShapingDirection::Increase, 2),
            "Increase 1 stitch at beginning and end of row"
        );
        assert_eq!(
            shaping_action(ShapingDirection::Increase, 6),
            "Increase 6 stitches evenly across row"
        );
    }

    #[test]
    fn test_plain_rows() {
        assert_eq!(plain_rows(1), "Work 1 row plain");
        assert_eq!(plain_rows(5), "Work 5 rows plain");
    }

    #[test]
    fn test_even_summary() {
        assert_eq!(
            summary(
                ShapingDirection::Decrease,
                2,
                &[IntervalRun { rows: 6, times: 10 }]
            ),
            "Decrease 2 stitches every 6th row, 10 times."
        );
        assert_eq!(
            summary(
                ShapingDirection::Increase,
                1,
                &[IntervalRun { rows: 3, times: 1 }]
            ),
            "Increase 1 stitch every 3rd row, 1 time."
        );
    }

    #[test]
    fn test_mixed_summary_lists_shorter_interval_first() {
        assert_eq!(
            summary(
                ShapingDirection::Increase,
                2,
                &[
                    IntervalRun { rows: 6, times: 5 },
                    IntervalRun { rows: 5, times: 5 },
                ]
            ),
            "Increase 2 stitches every 5th row 5 times, then every 6th row 5 times."
        );
        assert_eq!(
            summary(
                ShapingDirection::Decrease,
                2,
                &[
                    IntervalRun { rows: 2, times: 1 },
                    IntervalRun { rows: 1, times: 2 },
                ]
            ),
            "Decrease 2 stitches every row 2 times, then every 2nd row 1 time."
        );
    }

    #[test]
    fn test_summary_of_the_largest_interval() {
        assert_eq!(
            summary(
                ShapingDirection::Increase,
                2,
                &[IntervalRun {
                    rows: u32::MAX,
                    times: 1
                }]
            ),
            "Increase 2 stitches every 4294967295th row, 1 time."
        );
    }
}
