use penplot_core::geom::{Point, point};
use penplot_core::palette::CATEGORY10;
use penplot_core::{ChartOptions, SeriesPoint, series_keys_of};

use crate::axis::{self, DEFAULT_TICK_COUNT};
use crate::color::ColorScale;
use crate::frame::{Frame, Margin};
use crate::legend::{self, LegendEntry};
use crate::model::{ChartScene, DrawNode, Drawing, Stroke};
use crate::scale::{LinearScale, PointScale, domain_max};
use crate::shape;

const DEFAULT_WIDTH: f64 = 600.0;
const DEFAULT_HEIGHT: f64 = 400.0;
// The right margin reserves room for the legend swatch column.
const MARGIN: Margin = Margin::new(20.0, 100.0, 30.0, 50.0);
const LINE_WIDTH: f64 = 1.5;
const DOT_RADIUS: f64 = 4.0;
const AREA_OPACITY: f64 = 0.2;
const GRID_COLOR: &str = "#E2E8F0";
const GRID_LINE_WIDTH: f64 = 1.0;

/// Multi-series line chart: one polyline per series over a shared point
/// x-axis, optional area fill, dots and y grid, plus a legend. Native labels
/// are the legend entries, one per series.
pub fn compose_line_chart(data: &[SeriesPoint], options: &ChartOptions) -> ChartScene {
    let (width, height) = options.size_or(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    let frame = Frame::new(width, height, MARGIN);
    let plot_width = frame.plot_width();
    let plot_height = frame.plot_height();

    let keys = series_keys_of(data);
    let x_labels: Vec<String> = data.iter().map(|row| row.x.clone()).collect();
    let x = PointScale::new(x_labels, (0.0, plot_width));
    let max = domain_max(
        data.iter()
            .flat_map(|row| keys.iter().map(|key| row.value(key))),
    );
    let y = LinearScale::new((0.0, max), (plot_height, 0.0)).nice(DEFAULT_TICK_COUNT);

    let mut colors = ColorScale::new(options.palette_or(&CATEGORY10));

    let mut content_nodes = Vec::new();
    if options.grid_enabled() {
        let grid = y
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|tick| {
                let gy = y.map(tick);
                DrawNode::Line {
                    x1: 0.0,
                    y1: gy,
                    x2: plot_width,
                    y2: gy,
                    stroke: Stroke::new(GRID_COLOR, GRID_LINE_WIDTH),
                    opacity: 1.0,
                }
            })
            .collect();
        content_nodes.push(DrawNode::class_group("grid", grid));
    }

    let mut entries = Vec::with_capacity(keys.len());
    for key in &keys {
        let color = colors.color_for(key);
        let points: Vec<Point> = data
            .iter()
            .map(|row| point(x.position(&row.x), y.map(row.value(key))))
            .collect();

        let mut series_nodes = Vec::new();
        if options.area_enabled() {
            if let Some(d) = shape::area_path(&points, plot_height) {
                series_nodes.push(DrawNode::Path {
                    d,
                    fill: Some(color.clone()),
                    fill_opacity: Some(AREA_OPACITY),
                    stroke: None,
                });
            }
        }
        if let Some(d) = shape::polyline_path(&points) {
            series_nodes.push(DrawNode::Path {
                d,
                fill: None,
                fill_opacity: None,
                stroke: Some(Stroke::new(color.clone(), LINE_WIDTH)),
            });
        }
        if options.dots_enabled() {
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
        }
        content_nodes.push(DrawNode::class_group(format!("series-{key}"), series_nodes));
        entries.push(LegendEntry {
            label: key.clone(),
            color,
        });
    }

    content_nodes.push(axis::bottom_point_axis(&x, plot_width, plot_height));
    content_nodes.push(axis::left_linear_axis(&y, DEFAULT_TICK_COUNT));

    let nodes = vec![
        DrawNode::translated_group(MARGIN.left, MARGIN.top, content_nodes),
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
