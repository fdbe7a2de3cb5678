//! # knit_sleeve
//!
//! Stitch and row counts for a hammer-sleeve garment, where the sleeve cap
//! runs over the shoulder and drops into a rectangular cutout in the body.
//!
//! The calculator produces the sleeve cap extension, the sleeve cap's vertical
//! part, and the body panel shaping, then checks that the sleeve and the body
//! agree on the join edge.
//!
//! ## Example
//!
//! ```rust
//! use knit_gauge::{Gauge, Length, Unit};
//! use knit_sleeve::{calculate_hammer_sleeve, HammerSleeveInput};
//!
//! let gauge = Gauge::square(20.0, 28.0, 10.0, Unit::Cm).unwrap();
//! let input = HammerSleeveInput::new(
//!     Length::cm(45.0),
//!     Length::cm(32.0),
//!     Length::cm(20.0),
//!     Length::cm(25.0),
//!     gauge,
//! );
//!
//! let result = calculate_hammer_sleeve(&input).unwrap();
//! assert_eq!(result.sleeve_cap_extension.width_stitches, 20);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod result;

pub use calculator::{calculate_hammer_sleeve, check_join, HammerSleeveCalculator};
pub use config::SleeveLimits;
pub use error::{SleeveError, SleeveResult};
pub use input::{HammerComponent, HammerSleeveInput};
pub use result::{
    AchievedDimensions, BodyPanelShaping, HammerSleeveResult, SleeveCapExtension,
    SleeveCapVerticalPart,
};
