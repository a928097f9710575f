//! Chart composers, one pure function per chart kind: data rows and options
//! in, a [`crate::model::ChartScene`] out. Nothing is validated up front;
//! empty or malformed rows flow through the scales and degrade to
//! zero-sized geometry instead of failing.

pub mod bar;
pub mod line;
pub mod pie;
pub mod radar;

pub use bar::compose_bar_chart;
pub use line::compose_line_chart;
pub use pie::compose_pie_chart;
pub use radar::compose_radar_chart;

/// Numeric annotation text in shortest form, so `10.0` prints as `10`.
pub(crate) fn value_label(v: f64) -> String {
    format!("{v}")
}
