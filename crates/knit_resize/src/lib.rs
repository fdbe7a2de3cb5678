//! # knit_resize
//!
//! Rescales a pattern to a new gauge and/or a new size.
//!
//! Each template belongs to one of three shape families:
//!
//! - **Rectangular**: width × length (scarves, blankets, flat panels)
//! - **Tapered**: a narrow end, a wide end and the length between them; the
//!   taper is shaped with [`knit_shaping`]
//! - **Cylindrical**: circumference × height, worked in the round
//!
//! Every result reports the achieved dimensions recomputed from the rounded
//! counts, together with structured warnings when those drift from the target.
//!
//! ## Example
//!
//! ```rust
//! use knit_gauge::{GaugeSpec, Unit};
//! use knit_resize::{PatternResizer, ResizeOutputs, ResizeRequest};
//!
//! let gauge = GaugeSpec {
//!     stitches_per_swatch: Some(20.0),
//!     rows_per_swatch: Some(28.0),
//!     swatch_width: Some(10.0),
//!     swatch_height: Some(10.0),
//!     unit: Unit::Cm,
//! };
//! let request = ResizeRequest::new("scarf", gauge, gauge)
//!     .with_target("width", 50.0)
//!     .with_target("length", 150.0);
//!
//! let result = PatternResizer::new().resize(&request).unwrap();
//! match result.outputs {
//!     ResizeOutputs::Rectangular { stitches, rows, .. } => {
//!         assert_eq!(stitches, 100);
//!         assert_eq!(rows, 420);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod config;
pub mod error;
pub mod request;
pub mod resizer;
pub mod result;
pub mod template;

pub use config::ResizeTolerances;
pub use error::{ResizeError, ResizerResult};
pub use request::{ResizeRequest, ShapeSpec, TaperOriginal};
pub use resizer::{PatternResizer, ValidatedRequest};
pub use result::{OutputValue, ResizeOutputs, ResizeResult};
pub use template::{ShapeFamily, Template, TemplateCatalog};
