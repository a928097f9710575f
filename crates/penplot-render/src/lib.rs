#![forbid(unsafe_code)]

//! Chart layout and SVG serialization (headless).
//!
//! Each chart kind has one pure composer in [`chart`]: data rows plus options
//! in, a [`model::ChartScene`] out. The scene holds a drawing tree and the
//! native text labels the host places itself; [`svg::render_drawing`] turns
//! the tree into a self-contained SVG document string. Nothing in this crate
//! talks to a host or performs I/O.

pub mod axis;
pub mod chart;
pub mod color;
pub mod frame;
pub mod legend;
pub mod model;
pub mod scale;
pub mod shape;
pub mod svg;

pub use chart::{compose_bar_chart, compose_line_chart, compose_pie_chart, compose_radar_chart};
pub use model::{ChartScene, DrawNode, Drawing, Stroke, TextAnchor};
pub use svg::render_drawing;

#[cfg(test)]
mod tests;
