use serde::{Deserialize, Serialize};

/// Typeface the host falls back to for chart labels.
pub const DEFAULT_FONT_FAMILY: &str = "Work Sans";
/// Font size as the host API takes it: a bare string, no unit.
pub const DEFAULT_FONT_SIZE: &str = "12";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Fill {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            fill_color: color.into(),
            fill_opacity: 1.0,
        }
    }
}

/// A text placement the host materializes as a native text node, outside the
/// serialized drawing. Coordinates are absolute within the chart (already
/// offset by margins); `y` is the top edge of the text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLabel {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub align: TextAlign,
    pub font_size: String,
    pub font_family: String,
    pub fills: Vec<Fill>,
}

impl TextLabel {
    /// A label in the default typeface with a single solid fill.
    pub fn new(
        content: impl Into<String>,
        x: f64,
        y: f64,
        align: TextAlign,
        fill_color: &str,
    ) -> Self {
        Self {
            content: content.into(),
            x,
            y,
            align,
            font_size: DEFAULT_FONT_SIZE.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            fills: vec![Fill::solid(fill_color)],
        }
    }
}

/// The unit handed to the host collaborator: a self-contained SVG document
/// plus the labels to composite over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    pub svg: String,
    pub texts: Vec<TextLabel>,
}
