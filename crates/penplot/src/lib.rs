#![forbid(unsafe_code)]

//! `penplot` turns tabular data into charts a design tool can materialize
//! natively: a serialized SVG document for the geometry, plus a list of text
//! placements the host creates as real text nodes so they stay editable.
//!
//! The crate is headless and deterministic. [`build_chart`] is the whole
//! pipeline; [`message`] and [`host`] cover the plugin side of the exchange,
//! where chart payloads arrive as JSON and finished charts are inserted into
//! a host document.
//!
//! ```
//! use penplot::{ChartData, ChartKind, ChartOptions, ChartRequest, DataPoint, build_chart};
//!
//! let request = ChartRequest {
//!     kind: ChartKind::Bar,
//!     data: ChartData::Points(vec![
//!         DataPoint::new("A", 10.0),
//!         DataPoint::new("B", 20.0),
//!     ]),
//!     options: ChartOptions::default(),
//! };
//! let chart = build_chart(&request);
//! assert!(chart.svg.starts_with("<svg "));
//! assert_eq!(chart.texts.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

pub use penplot_core::*;

pub mod host;
pub mod message;

/// Layout internals, for callers that want the scene graph instead of the
/// serialized document.
pub mod render {
    pub use penplot_render::model::{ChartScene, DrawNode, Drawing, Stroke, TextAnchor};
    pub use penplot_render::svg::render_drawing;
    pub use penplot_render::{
        compose_bar_chart, compose_line_chart, compose_pie_chart, compose_radar_chart,
    };
}

use render::{ChartScene, render_drawing};

/// The supported chart types, as named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Radar,
}

impl ChartKind {
    /// Parses a wire discriminator. Unknown strings are rejected so a typo'd
    /// payload fails loudly instead of drawing the wrong chart.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "pie" => Ok(ChartKind::Pie),
            "radar" => Ok(ChartKind::Radar),
            other => Err(Error::UnsupportedChart {
                chart_type: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Radar => "radar",
        }
    }
}

impl std::str::FromStr for ChartKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChartKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChartKind {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        ChartKind::parse(&name).map_err(serde::de::Error::custom)
    }
}

/// One chart build request, as posted by the plugin UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
}

/// Builds a chart from a request. Single-value and multi-series payloads are
/// both accepted for every kind; rows are adapted to the shape the chart
/// needs before composition.
pub fn build_chart(request: &ChartRequest) -> ChartResult {
    let scene = match request.kind {
        ChartKind::Bar => render::compose_bar_chart(&request.data.value_rows(), &request.options),
        ChartKind::Line => render::compose_line_chart(&request.data.series_rows(), &request.options),
        ChartKind::Pie => render::compose_pie_chart(&request.data.value_rows(), &request.options),
        ChartKind::Radar => {
            render::compose_radar_chart(&request.data.series_rows(), &request.options)
        }
    };
    tracing::debug!(
        kind = %request.kind,
        rows = request.data.len(),
        labels = scene.labels.len(),
        "chart built"
    );
    finish(scene)
}

/// Deserializes a JSON request and builds the chart. Malformed payloads and
/// unknown chart types both surface as [`Error::Payload`].
pub fn build_chart_json(payload: &str) -> Result<ChartResult> {
    let request: ChartRequest = serde_json::from_str(payload)?;
    Ok(build_chart(&request))
}

/// Convenience wrapper that carries one [`ChartOptions`] across several
/// builds, for callers that chart slices directly instead of going through
/// a [`ChartRequest`].
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    options: ChartOptions,
}

impl ChartBuilder {
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn bar(&self, data: &[DataPoint]) -> ChartResult {
        finish(render::compose_bar_chart(data, &self.options))
    }

    pub fn line(&self, data: &[SeriesPoint]) -> ChartResult {
        finish(render::compose_line_chart(data, &self.options))
    }

    pub fn pie(&self, data: &[DataPoint]) -> ChartResult {
        finish(render::compose_pie_chart(data, &self.options))
    }

    pub fn radar(&self, data: &[SeriesPoint]) -> ChartResult {
        finish(render::compose_radar_chart(data, &self.options))
    }
}

fn finish(scene: ChartScene) -> ChartResult {
    ChartResult {
        svg: render_drawing(&scene.drawing),
        texts: scene.labels,
    }
}
