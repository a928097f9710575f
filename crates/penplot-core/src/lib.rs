#![forbid(unsafe_code)]

//! Chart data model and wire types (headless).
//!
//! Design goals:
//! - keep the host handoff contract bit-exact (field names, JSON shapes,
//!   string-typed font sizes); the host composites native text nodes from
//!   [`label::TextLabel`] records and trusts these fields verbatim
//! - deterministic, testable values: everything here is a plain immutable
//!   value created per chart build, never mutated after construction
//! - no geometry or layout; that lives in `penplot-render`

pub mod data;
pub mod error;
pub mod geom;
pub mod label;
pub mod options;
pub mod palette;

pub use data::{ChartData, DataPoint, SeriesPoint, VALUE_SERIES_KEY, series_keys_of};
pub use error::{Error, Result};
pub use label::{ChartResult, Fill, TextAlign, TextLabel};
pub use options::ChartOptions;
