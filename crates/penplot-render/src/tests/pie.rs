use std::f64::consts::{PI, TAU};

use penplot_core::{ChartOptions, DataPoint, TextAlign};

use crate::chart::compose_pie_chart;
use crate::chart::pie::wedge_angles;
use crate::model::{ChartScene, DrawNode};

fn rows(pairs: &[(&str, f64)]) -> Vec<DataPoint> {
    pairs.iter().map(|(n, v)| DataPoint::new(*n, *v)).collect()
}

fn slice_paths(scene: &ChartScene) -> Vec<(String, String)> {
    let DrawNode::Group { class, nodes, .. } = &scene.drawing.nodes[0] else {
        panic!("pie root is a group");
    };
    assert_eq!(class.as_deref(), Some("slices"));
    nodes
        .iter()
        .map(|n| match n {
            DrawNode::Path { d, fill, .. } => (d.clone(), fill.clone().unwrap()),
            other => panic!("expected path, got {other:?}"),
        })
        .collect()
}

#[test]
fn wedges_are_contiguous_and_sum_to_a_full_turn() {
    let wedges = wedge_angles(&rows(&[("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]));
    assert_eq!(wedges[0].start, 0.0);
    for pair in wedges.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    assert!((wedges.last().unwrap().end - TAU).abs() < 1e-9);
    // Spans stay proportional to values, in input order.
    assert!((wedges[0].end - wedges[0].start - TAU * 0.1).abs() < 1e-9);
    assert!((wedges[3].end - wedges[3].start - TAU * 0.4).abs() < 1e-9);
}

#[test]
fn non_positive_and_non_finite_values_get_zero_span() {
    let wedges = wedge_angles(&rows(&[
        ("ok", 5.0),
        ("zero", 0.0),
        ("negative", -3.0),
        ("nan", f64::NAN),
        ("also-ok", 5.0),
    ]));
    assert_eq!(wedges.len(), 5);
    assert!((wedges[0].end - PI).abs() < 1e-9);
    for w in &wedges[1..4] {
        assert_eq!(w.start, w.end);
    }
    assert!((wedges[4].end - TAU).abs() < 1e-9);
}

#[test]
fn all_non_positive_values_collapse_every_wedge() {
    let wedges = wedge_angles(&rows(&[("a", 0.0), ("b", -1.0)]));
    for w in &wedges {
        assert_eq!(w.start, 0.0);
        assert_eq!(w.end, 0.0);
    }
}

#[test]
fn two_equal_values_split_the_circle_in_half() {
    let data = rows(&[("X", 1.0), ("Y", 1.0)]);
    let scene = compose_pie_chart(&data, &ChartOptions::default());

    // 450x450, margin 40: radius 185, centered at (225, 225).
    let slices = slice_paths(&scene);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].0, "M0,-185A185,185,0,0,1,0,185L0,0Z");
    assert_eq!(slices[1].0, "M0,185A185,185,0,0,1,0,-185L0,0Z");
    assert_eq!(slices[0].1, "#1f77b4");
    assert_eq!(slices[1].1, "#ff7f0e");
}

#[test]
fn name_and_value_labels_stack_at_each_centroid() {
    let data = rows(&[("X", 1.0), ("Y", 1.0)]);
    let scene = compose_pie_chart(&data, &ChartOptions::default());

    assert_eq!(scene.labels.len(), 4);
    let contents: Vec<&str> = scene.labels.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(contents, vec!["X", "1", "Y", "1"]);

    // X's centroid sits at mid-radius on the right; name 16px above value.
    let (name, value) = (&scene.labels[0], &scene.labels[1]);
    assert!((name.x - 317.5).abs() < 1e-9);
    assert!((value.x - 317.5).abs() < 1e-9);
    assert!((name.y - 209.0).abs() < 1e-9);
    assert!((value.y - 225.0).abs() < 1e-9);
    assert_eq!(name.align, TextAlign::Center);

    // Y mirrors it on the left.
    assert!((scene.labels[2].x - 132.5).abs() < 1e-9);
}

#[test]
fn zero_valued_rows_keep_their_labels() {
    let data = rows(&[("X", 0.0), ("Y", 4.0)]);
    let scene = compose_pie_chart(&data, &ChartOptions::default());
    assert_eq!(slice_paths(&scene).len(), 2);
    assert_eq!(scene.labels.len(), 4);
    assert_eq!(scene.labels[0].content, "X");
    assert_eq!(scene.labels[1].content, "0");
}

#[test]
fn single_positive_value_fills_the_whole_circle() {
    let data = rows(&[("only", 7.0)]);
    let scene = compose_pie_chart(&data, &ChartOptions::default());
    let slices = slice_paths(&scene);
    assert_eq!(slices[0].0, "M0,-185A185,185,0,1,1,0,185A185,185,0,1,1,0,-185Z");
}

#[test]
fn inner_radius_scales_linearly_with_the_option() {
    let data = rows(&[("X", 1.0), ("Y", 1.0)]);
    for (fraction, inner) in [(0.4, "74"), (0.5, "92.5")] {
        let options = ChartOptions {
            inner_radius: Some(fraction),
            ..ChartOptions::default()
        };
        let scene = compose_pie_chart(&data, &options);
        let slices = slice_paths(&scene);
        let arc = format!("A{inner},{inner},0,0,0");
        assert!(
            slices[0].0.contains(&arc),
            "missing inner arc {arc} in {}",
            slices[0].0
        );
    }
}

#[test]
fn out_of_range_inner_radius_is_clamped() {
    let data = rows(&[("only", 7.0)]);
    let options = ChartOptions {
        inner_radius: Some(2.0),
        ..ChartOptions::default()
    };
    let scene = compose_pie_chart(&data, &options);
    // Clamped to 1.0: the hole equals the outer radius.
    assert!(slice_paths(&scene)[0].0.contains("A185,185,0,1,0"));
}

#[test]
fn empty_data_renders_an_empty_slice_group() {
    let scene = compose_pie_chart(&[], &ChartOptions::default());
    assert!(slice_paths(&scene).is_empty());
    assert!(scene.labels.is_empty());
    assert_eq!(scene.drawing.width, 450.0);
}
