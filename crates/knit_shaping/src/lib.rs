//! # knit_shaping
//!
//! Spreads increases or decreases as evenly as possible over a row budget.
//!
//! Given a starting and target stitch count, the rows available and how many
//! stitches change on each shaping row, the calculator produces:
//!
//! - **A schedule**: the interval between shaping rows, longest intervals first
//! - **Step-by-step instructions**: "work N rows plain" and shaping rows with
//!   running row offsets
//! - **A one-line summary**: "Decrease 2 stitches every 6th row, 10 times."
//! - **Warnings**: implausible row budgets or stitch changes
//!
//! ## Example
//!
//! ```rust
//! use knit_gauge::Unit;
//! use knit_shaping::{ShapingCalculator, ShapingInput};
//!
//! let input = ShapingInput::new(60, 40, 60, 2, 2.8, Unit::Cm);
//! let schedule = ShapingCalculator::new().calculate(&input).unwrap();
//!
//! assert_eq!(
//!     schedule.summary(),
//!     Some("Decrease 2 stitches every 6th row, 10 times.")
//! );
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod instruction;
pub mod schedule;

pub use calculator::{calculate_shaping, ShapingCalculator};
pub use config::ShapingLimits;
pub use error::{ShapingError, ShapingResult};
pub use instruction::ordinal;
pub use schedule::{
    IntervalRun, ShapingDirection, ShapingEvent, ShapingInput, ShapingSchedule, ShapingStep,
    StepKind,
};
