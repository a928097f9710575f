use penplot_core::palette::CATEGORY10;
use penplot_core::{ChartOptions, DataPoint, TextAlign, TextLabel};

use crate::axis::{self, DEFAULT_TICK_COUNT};
use crate::chart::value_label;
use crate::color::ColorScale;
use crate::frame::{Frame, Margin};
use crate::model::{ChartScene, DrawNode, Drawing};
use crate::scale::{BandScale, LinearScale, domain_max};

const DEFAULT_WIDTH: f64 = 600.0;
const DEFAULT_HEIGHT: f64 = 400.0;
const MARGIN: Margin = Margin::new(20.0, 20.0, 30.0, 40.0);
/// Gap between a bar's top edge and the top of its value label.
const VALUE_LABEL_RISE: f64 = 16.0;
const VALUE_LABEL_FILL: &str = "#1A1A1A";

/// Vertical bar chart: one band per row, bars growing up from the baseline,
/// one native value label centered above each bar.
pub fn compose_bar_chart(data: &[DataPoint], options: &ChartOptions) -> ChartScene {
    let (width, height) = options.size_or(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    let frame = Frame::new(width, height, MARGIN);
    let plot_width = frame.plot_width();
    let plot_height = frame.plot_height();

    let names: Vec<String> = data.iter().map(|d| d.name.clone()).collect();
    let x = BandScale::new(names, (0.0, plot_width));
    let y = LinearScale::new(
        (0.0, domain_max(data.iter().map(|d| d.value))),
        (plot_height, 0.0),
    )
    .nice(DEFAULT_TICK_COUNT);

    let mut colors = ColorScale::new(options.palette_or(&CATEGORY10));

    let mut bars = Vec::with_capacity(data.len());
    let mut labels = Vec::with_capacity(data.len());
    for row in data {
        let x0 = x.position(&row.name);
        let top = y.map(row.value);
        bars.push(DrawNode::Rect {
            x: x0,
            y: top,
            width: x.bandwidth(),
            height: plot_height - top,
            fill: colors.color_for(&row.name),
        });
        labels.push(TextLabel::new(
            value_label(row.value),
            MARGIN.left + x0 + x.bandwidth() / 2.0,
            MARGIN.top + top - VALUE_LABEL_RISE,
            TextAlign::Center,
            VALUE_LABEL_FILL,
        ));
    }

    let content = DrawNode::translated_group(
        MARGIN.left,
        MARGIN.top,
        vec![
            DrawNode::class_group("bars", bars),
            axis::bottom_band_axis(&x, plot_width, plot_height),
            axis::left_linear_axis(&y, DEFAULT_TICK_COUNT),
        ],
    );

    ChartScene {
        drawing: Drawing {
            width,
            height,
            nodes: vec![content],
        },
        labels,
    }
}
