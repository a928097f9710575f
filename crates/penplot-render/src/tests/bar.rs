use penplot_core::{ChartOptions, DataPoint, TextAlign};

use crate::chart::compose_bar_chart;
use crate::model::{ChartScene, DrawNode};
use crate::svg::render_drawing;

fn rows(pairs: &[(&str, f64)]) -> Vec<DataPoint> {
    pairs.iter().map(|(n, v)| DataPoint::new(*n, *v)).collect()
}

fn plot_nodes(scene: &ChartScene) -> &[DrawNode] {
    match &scene.drawing.nodes[0] {
        DrawNode::Group {
            translate: Some(_),
            nodes,
            ..
        } => nodes,
        other => panic!("expected margin-translated root group, got {other:?}"),
    }
}

fn class_group<'a>(nodes: &'a [DrawNode], name: &str) -> &'a [DrawNode] {
    nodes
        .iter()
        .find_map(|n| match n {
            DrawNode::Group {
                class: Some(c),
                nodes,
                ..
            } if c == name => Some(nodes.as_slice()),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no `{name}` group"))
}

fn rect_frames(nodes: &[DrawNode]) -> Vec<(f64, f64, f64, f64)> {
    nodes
        .iter()
        .filter_map(|n| match n {
            DrawNode::Rect {
                x,
                y,
                width,
                height,
                ..
            } => Some((*x, *y, *width, *height)),
            _ => None,
        })
        .collect()
}

#[test]
fn doubled_value_doubles_the_bar_height() {
    let data = rows(&[("A", 10.0), ("B", 20.0)]);
    let scene = compose_bar_chart(&data, &ChartOptions::default());

    // 600x400 with margins 20/20/30/40 leaves a 540x350 plot; the niced
    // domain is [0, 20], so B fills the plot height.
    let bars = rect_frames(class_group(plot_nodes(&scene), "bars"));
    assert_eq!(bars.len(), 2);
    let (_, y_a, w_a, h_a) = bars[0];
    let (_, y_b, w_b, h_b) = bars[1];
    assert_eq!((y_a, h_a), (175.0, 175.0));
    assert_eq!((y_b, h_b), (0.0, 350.0));
    assert_eq!(h_b, 2.0 * h_a);
    assert_eq!(w_a, w_b);
}

#[test]
fn one_value_label_per_bar_centered_above_it() {
    let data = rows(&[("A", 10.0), ("B", 20.0)]);
    let scene = compose_bar_chart(&data, &ChartOptions::default());

    assert_eq!(scene.labels.len(), 2);
    let a = &scene.labels[0];
    let b = &scene.labels[1];
    assert_eq!(a.content, "10");
    assert_eq!(b.content, "20");
    assert_eq!(a.align, TextAlign::Center);
    // 16px above the bar top, in chart-absolute coordinates.
    assert_eq!(a.y, 179.0);
    assert_eq!(b.y, 4.0);

    // Band centers: step = 540 / 2.1, offset by the left margin.
    let step = 540.0 / 2.1;
    assert!((a.x - (40.0 + 0.55 * step)).abs() < 1e-9);
    assert!((b.x - a.x - step).abs() < 1e-9);
}

#[test]
fn all_zero_values_collapse_onto_the_baseline() {
    let data = rows(&[("a", 0.0), ("b", 0.0), ("c", 0.0)]);
    let scene = compose_bar_chart(&data, &ChartOptions::default());

    let bars = rect_frames(class_group(plot_nodes(&scene), "bars"));
    assert_eq!(bars.len(), 3);
    for (_, y, _, h) in bars {
        assert_eq!(y, 350.0);
        assert_eq!(h, 0.0);
    }
    // Zero-height bars still get their value labels.
    assert_eq!(scene.labels.len(), 3);
    for label in &scene.labels {
        assert_eq!(label.content, "0");
        assert_eq!(label.y, 354.0);
    }
}

#[test]
fn bar_colors_are_stable_across_rebuilds() {
    let data = rows(&[("A", 10.0), ("B", 20.0), ("C", 5.0)]);
    let first = compose_bar_chart(&data, &ChartOptions::default());
    let second = compose_bar_chart(&data, &ChartOptions::default());

    let fills = |scene: &ChartScene| -> Vec<String> {
        class_group(plot_nodes(scene), "bars")
            .iter()
            .filter_map(|n| match n {
                DrawNode::Rect { fill, .. } => Some(fill.clone()),
                _ => None,
            })
            .collect()
    };
    let first_fills = fills(&first);
    assert_eq!(first_fills, vec!["#1f77b4", "#ff7f0e", "#2ca02c"]);
    assert_eq!(first_fills, fills(&second));
}

#[test]
fn configured_scheme_replaces_the_default_palette() {
    let data = rows(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
    let options = ChartOptions {
        color_scheme: Some(vec!["#111111".to_string(), "#222222".to_string()]),
        ..ChartOptions::default()
    };
    let scene = compose_bar_chart(&data, &options);

    let fills: Vec<String> = class_group(plot_nodes(&scene), "bars")
        .iter()
        .filter_map(|n| match n {
            DrawNode::Rect { fill, .. } => Some(fill.clone()),
            _ => None,
        })
        .collect();
    // Two colors cycle over three bars.
    assert_eq!(fills, vec!["#111111", "#222222", "#111111"]);
}

#[test]
fn axes_label_every_category_and_tick() {
    let data = rows(&[("A", 10.0), ("B", 20.0)]);
    let scene = compose_bar_chart(&data, &ChartOptions::default());
    let nodes = plot_nodes(&scene);

    let texts = |name: &str| -> Vec<String> {
        class_group(nodes, name)
            .iter()
            .filter_map(|n| match n {
                DrawNode::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    };
    assert_eq!(texts("x-axis"), vec!["A", "B"]);
    // Domain [0, 20] ticks by 2.
    let y_texts = texts("y-axis");
    assert_eq!(y_texts.len(), 11);
    assert_eq!(y_texts.first().map(String::as_str), Some("0"));
    assert_eq!(y_texts.last().map(String::as_str), Some("20"));
}

#[test]
fn empty_data_still_renders_a_frame() {
    let scene = compose_bar_chart(&[], &ChartOptions::default());
    assert_eq!(scene.drawing.width, 600.0);
    assert_eq!(scene.drawing.height, 400.0);
    assert!(scene.labels.is_empty());
    assert!(class_group(plot_nodes(&scene), "bars").is_empty());

    let svg = render_drawing(&scene.drawing);
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn configured_size_overrides_the_default_frame() {
    let data = rows(&[("A", 10.0)]);
    let options = ChartOptions {
        width: Some(800.0),
        height: Some(300.0),
        ..ChartOptions::default()
    };
    let scene = compose_bar_chart(&data, &options);
    assert_eq!(scene.drawing.width, 800.0);
    assert_eq!(scene.drawing.height, 300.0);
}
