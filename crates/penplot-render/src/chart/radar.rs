use std::f64::consts::{FRAC_PI_2, TAU};

use penplot_core::geom::Point;
use penplot_core::palette::TABLEAU10;
use penplot_core::{ChartOptions, SeriesPoint, series_keys_of};

use crate::color::ColorScale;
use crate::legend::{self, LegendEntry};
use crate::model::{ChartScene, DrawNode, Drawing, Stroke, TextAnchor};
use crate::scale::{LinearScale, domain_max};
use crate::shape;

const DEFAULT_SIZE: f64 = 450.0;
const MARGIN: f64 = 40.0;
const GRID_LEVELS: usize = 5;
const GRID_OPACITY: f64 = 0.8;
const LINE_WIDTH: f64 = 1.5;
const DOT_RADIUS: f64 = 4.0;
const FILL_OPACITY: f64 = 0.2;
/// Category labels sit this far beyond the outer graticule ring.
const AXIS_LABEL_OFFSET: f64 = 20.0;
const AXIS_LABEL_FONT_SIZE: f64 = 12.0;
const AXIS_LABEL_FILL: &str = "#000000";

/// N equal angular steps clockwise from 12 o'clock (spoke convention:
/// zero at 3 o'clock, so the first spoke is `-π/2`).
pub(crate) fn spoke_angles(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| i as f64 * TAU / n as f64 - FRAC_PI_2)
        .collect()
}

/// Anchor rule for a category label at `angle`: labels right of the center
/// grow rightward, labels left of it grow leftward, top and bottom stay
/// centered.
fn axis_label_anchor(angle: f64) -> TextAnchor {
    if angle.abs() < FRAC_PI_2 {
        TextAnchor::Start
    } else if angle.abs() > FRAC_PI_2 {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    }
}

/// Radar chart: one closed polygon per series over N spokes, concentric
/// guide rings, category labels around the rim, and a legend. Native labels
/// are the legend entries, one per series.
pub fn compose_radar_chart(data: &[SeriesPoint], options: &ChartOptions) -> ChartScene {
    let (width, height) = options.size_or(DEFAULT_SIZE, DEFAULT_SIZE);
    let radius = width.min(height) / 2.0 - MARGIN;
    let grid_color = options.grid_color_or_default();

    let keys = series_keys_of(data);
    let max = domain_max(
        data.iter()
            .flat_map(|row| keys.iter().map(|key| row.value(key))),
    );
    let r_scale = LinearScale::new((0.0, max), (0.0, radius));
    let angles = spoke_angles(data.len());

    let mut center_nodes = Vec::new();
    for level in 1..=GRID_LEVELS {
        center_nodes.push(DrawNode::Circle {
            cx: 0.0,
            cy: 0.0,
            r: radius * level as f64 / GRID_LEVELS as f64,
            fill: None,
            stroke: Some(Stroke::new(grid_color, 1.0)),
            opacity: GRID_OPACITY,
        });
    }
    for &angle in &angles {
        let tip = shape::spoke_point(radius, angle);
        center_nodes.push(DrawNode::Line {
            x1: 0.0,
            y1: 0.0,
            x2: tip.x,
            y2: tip.y,
            stroke: Stroke::new(grid_color, 1.0),
            opacity: GRID_OPACITY,
        });
    }

    let mut colors = ColorScale::new(options.palette_or(&TABLEAU10));
    let mut entries = Vec::with_capacity(keys.len());
    for key in &keys {
        let color = colors.color_for(key);
        let points: Vec<Point> = data
            .iter()
            .zip(&angles)
            .map(|(row, &angle)| shape::spoke_point(r_scale.map(row.value(key)), angle))
            .collect();

        let mut series_nodes = Vec::new();
        if let Some(d) = shape::polygon_path(&points) {
            if options.fill_enabled() {
                series_nodes.push(DrawNode::Path {
                    d: d.clone(),
                    fill: Some(color.clone()),
                    fill_opacity: Some(FILL_OPACITY),
                    stroke: None,
                });
            }
            series_nodes.push(DrawNode::Path {
                d,
                fill: None,
                fill_opacity: None,
                stroke: Some(Stroke::new(color.clone(), LINE_WIDTH)),
            });
        }
        for p in &points {
            series_nodes.push(DrawNode::Circle {
                cx: p.x,
                cy: p.y,
                r: DOT_RADIUS,
                fill: Some(color.clone()),
                stroke: None,
                opacity: 1.0,
            });
        }
        center_nodes.push(DrawNode::class_group(format!("series-{key}"), series_nodes));
        entries.push(LegendEntry {
            label: key.clone(),
            color,
        });
    }

    for (row, &angle) in data.iter().zip(&angles) {
        let at = shape::spoke_point(radius + AXIS_LABEL_OFFSET, angle);
        center_nodes.push(DrawNode::Text {
            text: row.x.clone(),
            x: at.x,
            y: at.y,
            fill: AXIS_LABEL_FILL.to_string(),
            font_size: AXIS_LABEL_FONT_SIZE,
            anchor: axis_label_anchor(angle),
        });
    }

    let nodes = vec![
        DrawNode::translated_group(width / 2.0, height / 2.0, center_nodes),
        legend::swatch_nodes(&entries, width),
    ];

    ChartScene {
        drawing: Drawing {
            width,
            height,
            nodes,
        },
        labels: legend::entry_labels(&entries, width),
    }
}
