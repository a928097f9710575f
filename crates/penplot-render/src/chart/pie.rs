use std::f64::consts::TAU;

use penplot_core::palette::CATEGORY10;
use penplot_core::{ChartOptions, DataPoint, TextAlign, TextLabel};

use crate::chart::value_label;
use crate::color::ColorScale;
use crate::model::{ChartScene, DrawNode, Drawing};
use crate::shape;

const DEFAULT_SIZE: f64 = 450.0;
const MARGIN: f64 = 40.0;
/// Vertical gap between the stacked name and value labels at a centroid.
const LABEL_STACK_GAP: f64 = 16.0;
const LABEL_FILL: &str = "#000000";

/// One wedge's angular extent, in input order (pie convention: radians
/// clockwise from 12 o'clock).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Wedge {
    pub name: String,
    pub value: f64,
    pub start: f64,
    pub end: f64,
}

/// Cumulative angular extents over the full turn, in input order. Only
/// positive finite values occupy arc; anything else becomes a zero-span
/// wedge at its cumulative position, and a non-positive total collapses
/// every wedge.
pub(crate) fn wedge_angles(data: &[DataPoint]) -> Vec<Wedge> {
    let total: f64 = data
        .iter()
        .map(|d| d.value)
        .filter(|v| *v > 0.0 && v.is_finite())
        .sum();
    let k = if total > 0.0 { TAU / total } else { 0.0 };

    let mut angle = 0.0;
    data.iter()
        .map(|d| {
            let start = angle;
            let span = if d.value > 0.0 && d.value.is_finite() {
                d.value * k
            } else {
                0.0
            };
            angle += span;
            Wedge {
                name: d.name.clone(),
                value: d.value,
                start,
                end: angle,
            }
        })
        .collect()
}

/// Pie/donut chart: wedges proportional to value in input order, with two
/// native labels per row (name and value stacked at the wedge centroid).
pub fn compose_pie_chart(data: &[DataPoint], options: &ChartOptions) -> ChartScene {
    let (width, height) = options.size_or(DEFAULT_SIZE, DEFAULT_SIZE);
    let radius = width.min(height) / 2.0 - MARGIN;
    let inner_radius = radius * options.inner_radius_fraction();
    let center_x = width / 2.0;
    let center_y = height / 2.0;

    let mut colors = ColorScale::new(options.palette_or(&CATEGORY10));
    let wedges = wedge_angles(data);

    let mut slices = Vec::with_capacity(wedges.len());
    let mut labels = Vec::with_capacity(wedges.len() * 2);
    for w in &wedges {
        slices.push(DrawNode::Path {
            d: shape::wedge_path(radius, inner_radius, w.start, w.end),
            fill: Some(colors.color_for(&w.name)),
            fill_opacity: None,
            stroke: None,
        });

        let c = shape::wedge_centroid(radius, inner_radius, w.start, w.end);
        labels.push(TextLabel::new(
            w.name.clone(),
            center_x + c.x,
            center_y + c.y - LABEL_STACK_GAP,
            TextAlign::Center,
            LABEL_FILL,
        ));
        labels.push(TextLabel::new(
            value_label(w.value),
            center_x + c.x,
            center_y + c.y,
            TextAlign::Center,
            LABEL_FILL,
        ));
    }

    let scene_root = DrawNode::Group {
        class: Some("slices".to_string()),
        translate: Some((center_x, center_y)),
        nodes: slices,
    };

    ChartScene {
        drawing: Drawing {
            width,
            height,
            nodes: vec![scene_root],
        },
        labels,
    }
}
