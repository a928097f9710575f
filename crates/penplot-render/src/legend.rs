//! Shared legend for multi-series charts: 15x15 color swatches stacked in
//! the top-right corner of the drawing, with the series names delivered as
//! native text labels so the host typesets them itself.

use penplot_core::{TextAlign, TextLabel};

use crate::model::DrawNode;

pub const SWATCH_SIZE: f64 = 15.0;
const SWATCH_RIGHT_OFFSET: f64 = 60.0;
const LABEL_RIGHT_OFFSET: f64 = 40.0;
const TOP_OFFSET: f64 = 20.0;
const ROW_STEP: f64 = 20.0;
const LABEL_FILL: &str = "#1A1A1A";

#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Swatch rectangles in chart-absolute coordinates; append to the drawing
/// root, not to a margin-translated group.
pub fn swatch_nodes(entries: &[LegendEntry], chart_width: f64) -> DrawNode {
    let nodes = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| DrawNode::Rect {
            x: chart_width - SWATCH_RIGHT_OFFSET,
            y: TOP_OFFSET + ROW_STEP * i as f64,
            width: SWATCH_SIZE,
            height: SWATCH_SIZE,
            fill: entry.color.clone(),
        })
        .collect();
    DrawNode::class_group("legend", nodes)
}

/// One native label per entry, left-aligned beside its swatch.
pub fn entry_labels(entries: &[LegendEntry], chart_width: f64) -> Vec<TextLabel> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            TextLabel::new(
                entry.label.clone(),
                chart_width - LABEL_RIGHT_OFFSET,
                TOP_OFFSET + ROW_STEP * i as f64,
                TextAlign::Left,
                LABEL_FILL,
            )
        })
        .collect()
}
