use serde::{Deserialize, Serialize};

/// Grid/graticule stroke used when `gridColor` is not configured.
pub const DEFAULT_GRID_COLOR: &str = "#E2E8F0";

/// Recognized chart options. Every field is optional on the wire; composers
/// resolve per-chart defaults through the accessors below. Unknown fields in
/// a payload are tolerated and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Ordered color cycle shared by every chart type.
    pub color_scheme: Option<Vec<String>>,
    /// Pie: donut hole as a fraction of the outer radius, in `[0, 1]`.
    pub inner_radius: Option<f64>,
    /// Line: horizontal guide lines at each y tick.
    pub show_grid: Option<bool>,
    /// Line: markers at each plotted point.
    pub show_dots: Option<bool>,
    /// Line: filled region between each series and the baseline.
    pub show_area: Option<bool>,
    /// Radar: translucent fill inside each series polygon.
    pub show_fill: Option<bool>,
    /// Radar: stroke for guide circles and spokes.
    pub grid_color: Option<String>,
}

impl ChartOptions {
    pub fn size_or(&self, default_width: f64, default_height: f64) -> (f64, f64) {
        (
            self.width.unwrap_or(default_width),
            self.height.unwrap_or(default_height),
        )
    }

    /// The configured color cycle, or `fallback` when absent or empty.
    pub fn palette_or(&self, fallback: &[&str]) -> Vec<String> {
        match &self.color_scheme {
            Some(colors) if !colors.is_empty() => colors.clone(),
            _ => fallback.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Donut hole fraction, clamped to `[0, 1]`. Zero (solid pie) when unset.
    pub fn inner_radius_fraction(&self) -> f64 {
        self.inner_radius.unwrap_or(0.0).clamp(0.0, 1.0)
    }

    pub fn grid_enabled(&self) -> bool {
        self.show_grid.unwrap_or(false)
    }

    pub fn dots_enabled(&self) -> bool {
        self.show_dots.unwrap_or(true)
    }

    pub fn area_enabled(&self) -> bool {
        self.show_area.unwrap_or(false)
    }

    pub fn fill_enabled(&self) -> bool {
        self.show_fill.unwrap_or(false)
    }

    pub fn grid_color_or_default(&self) -> &str {
        self.grid_color.as_deref().unwrap_or(DEFAULT_GRID_COLOR)
    }
}
