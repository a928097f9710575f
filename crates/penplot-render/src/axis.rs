//! Axis rendering into drawable nodes, visually matching d3-axis defaults:
//! a domain line, 6px tick marks and 10px labels.

use crate::model::{DrawNode, Stroke, TextAnchor};
use crate::scale::{BandScale, LinearScale, PointScale};

pub const DEFAULT_TICK_COUNT: usize = 10;

const AXIS_COLOR: &str = "#000000";
const AXIS_LINE_WIDTH: f64 = 1.0;
const TICK_LENGTH: f64 = 6.0;
const LABEL_FONT_SIZE: f64 = 10.0;
// Tick length + 3px padding + approximate cap ascent, so labels clear the
// tick marks the way d3's `dy` adjustments place them.
const BOTTOM_LABEL_OFFSET: f64 = 16.0;
const LEFT_LABEL_OFFSET: f64 = 9.0;
const LEFT_LABEL_BASELINE_SHIFT: f64 = 3.0;

/// Bottom axis for a band scale: ticks centered on each band.
pub fn bottom_band_axis(scale: &BandScale, plot_width: f64, plot_height: f64) -> DrawNode {
    let ticks = scale
        .categories()
        .iter()
        .map(|name| (name.clone(), scale.position(name) + scale.bandwidth() / 2.0))
        .collect();
    category_axis(ticks, plot_width, plot_height)
}

/// Bottom axis for a point scale: ticks at each point position.
pub fn bottom_point_axis(scale: &PointScale, plot_width: f64, plot_height: f64) -> DrawNode {
    let ticks = scale
        .categories()
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), scale.position_of_index(i)))
        .collect();
    category_axis(ticks, plot_width, plot_height)
}

fn category_axis(ticks: Vec<(String, f64)>, plot_width: f64, plot_height: f64) -> DrawNode {
    let mut nodes = vec![DrawNode::Line {
        x1: 0.0,
        y1: plot_height,
        x2: plot_width,
        y2: plot_height,
        stroke: Stroke::new(AXIS_COLOR, AXIS_LINE_WIDTH),
        opacity: 1.0,
    }];
    for (label, x) in ticks {
        nodes.push(DrawNode::Line {
            x1: x,
            y1: plot_height,
            x2: x,
            y2: plot_height + TICK_LENGTH,
            stroke: Stroke::new(AXIS_COLOR, AXIS_LINE_WIDTH),
            opacity: 1.0,
        });
        nodes.push(DrawNode::Text {
            text: label,
            x,
            y: plot_height + BOTTOM_LABEL_OFFSET,
            fill: AXIS_COLOR.to_string(),
            font_size: LABEL_FONT_SIZE,
            anchor: TextAnchor::Middle,
        });
    }
    DrawNode::class_group("x-axis", nodes)
}

/// Left axis for a linear scale: one tick per `ticks` value, labels
/// right-aligned against the plot edge.
pub fn left_linear_axis(scale: &LinearScale, tick_count: usize) -> DrawNode {
    let (r0, r1) = scale.range();
    let mut nodes = vec![DrawNode::Line {
        x1: 0.0,
        y1: r0,
        x2: 0.0,
        y2: r1,
        stroke: Stroke::new(AXIS_COLOR, AXIS_LINE_WIDTH),
        opacity: 1.0,
    }];
    for value in scale.ticks(tick_count) {
        let y = scale.map(value);
        nodes.push(DrawNode::Line {
            x1: -TICK_LENGTH,
            y1: y,
            x2: 0.0,
            y2: y,
            stroke: Stroke::new(AXIS_COLOR, AXIS_LINE_WIDTH),
            opacity: 1.0,
        });
        nodes.push(DrawNode::Text {
            text: tick_label(value),
            x: -LEFT_LABEL_OFFSET,
            y: y + LEFT_LABEL_BASELINE_SHIFT,
            fill: AXIS_COLOR.to_string(),
            font_size: LABEL_FONT_SIZE,
            anchor: TextAnchor::End,
        });
    }
    DrawNode::class_group("y-axis", nodes)
}

fn tick_label(v: f64) -> String {
    format!("{v}")
}
