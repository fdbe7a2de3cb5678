//! # knit_gauge
//!
//! Gauge conversion primitives shared by every knitwise calculator.
//!
//! This crate provides:
//! - **Units and lengths**: [`Unit`] (`cm` / `inch`) and the [`Length`] wrapper
//!   that keeps a number tied to its unit
//! - **Gauge**: an immutable, validated swatch measurement
//! - **Conversions**: length ⇄ stitches/rows and cm ⇄ inch
//! - **Warnings**: structured, non-fatal diagnostics produced by the calculators
//! - **Validation reports**: field-level error collection
//!
//! ## Example
//!
//! ```rust
//! use knit_gauge::{convert, Gauge, Length, Unit};
//!
//! let gauge = Gauge::square(20.0, 28.0, 10.0, Unit::Cm).unwrap();
//! let stitches = convert::length_to_stitches(Length::cm(50.0), &gauge);
//! assert_eq!(stitches, 100);
//!
//! let achieved = convert::stitches_to_length(stitches, &gauge);
//! assert_eq!(achieved, Length::cm(50.0));
//! ```

pub mod convert;
pub mod error;
pub mod gauge;
pub mod unit;
pub mod validation;
pub mod warning;

pub use convert::{
    convert_unit, length_to_rows, length_to_stitches, rows_to_length, stitches_to_length,
};
pub use error::{GaugeError, GaugeResult};
pub use gauge::{Gauge, GaugeSpec};
pub use unit::{format_amount, Length, Unit, CM_PER_INCH};
pub use validation::ValidationReport;
pub use warning::{JoinEdge, Warning};
