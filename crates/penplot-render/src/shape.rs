//! SVG path construction for chart marks: polylines, areas, closed polygons
//! and pie wedges. Path numbers are rounded to three fractional digits, the
//! d3-path convention, so documents stay compact and stable across builds.

use std::fmt::Write as _;

use penplot_core::geom::{Point, point};

/// Polar point with the pie convention: angle zero at 12 o'clock, increasing
/// clockwise, y growing downward.
pub fn wedge_point(radius: f64, angle: f64) -> Point {
    point(radius * angle.sin(), -radius * angle.cos())
}

/// Polar point with the spoke convention: angle zero at 3 o'clock, increasing
/// clockwise (y grows downward), so `-π/2` points at 12 o'clock.
pub fn spoke_point(radius: f64, angle: f64) -> Point {
    point(radius * angle.cos(), radius * angle.sin())
}

/// Open polyline through every point in order. `None` when empty; a single
/// point degenerates to a closed zero-length path.
pub fn polyline_path(points: &[Point]) -> Option<String> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return Some(format!("M{},{}Z", fmt_num(first.x), fmt_num(first.y)));
    }
    let mut out = format!("M{},{}", fmt_num(first.x), fmt_num(first.y));
    for p in rest {
        let _ = write!(out, "L{},{}", fmt_num(p.x), fmt_num(p.y));
    }
    Some(out)
}

/// Polyline closed against a horizontal baseline: down from the last point,
/// along the baseline, back under the first. `None` when empty.
pub fn area_path(points: &[Point], baseline: f64) -> Option<String> {
    let first = points.first()?;
    let last = points.last()?;
    let mut out = format!("M{},{}", fmt_num(first.x), fmt_num(first.y));
    for p in &points[1..] {
        let _ = write!(out, "L{},{}", fmt_num(p.x), fmt_num(p.y));
    }
    let _ = write!(out, "L{},{}", fmt_num(last.x), fmt_num(baseline));
    let _ = write!(out, "L{},{}Z", fmt_num(first.x), fmt_num(baseline));
    Some(out)
}

/// Closed polygon: the first vertex is repeated at the end instead of using
/// `Z`, so a stroked outline gets a proper joint at the seam.
pub fn polygon_path(points: &[Point]) -> Option<String> {
    let first = *points.first()?;
    let mut closed = points.to_vec();
    closed.push(first);
    polyline_path(&closed)
}

/// One pie/donut slice covering `[start, end]` radians (pie convention).
///
/// A span within float noise of a full turn renders as concentric circles,
/// because a 2π arc command collapses to nothing. The inner outline runs
/// counter-clockwise so the nonzero fill rule leaves the hole open.
pub fn wedge_path(outer: f64, inner: f64, start: f64, end: f64) -> String {
    use std::f64::consts::{PI, TAU};

    let span = end - start;
    if span >= TAU - 1e-9 {
        let mut out = full_circle(outer, true);
        if inner > 0.0 {
            out.push_str(&full_circle(inner, false));
        }
        out.push('Z');
        return out;
    }

    let o0 = wedge_point(outer, start);
    let o1 = wedge_point(outer, end);
    let large = if span > PI { 1 } else { 0 };

    if inner > 0.0 {
        let i0 = wedge_point(inner, start);
        let i1 = wedge_point(inner, end);
        format!(
            "M{},{}A{r},{r},0,{large},1,{},{}L{},{}A{ri},{ri},0,{large},0,{},{}Z",
            fmt_num(o0.x),
            fmt_num(o0.y),
            fmt_num(o1.x),
            fmt_num(o1.y),
            fmt_num(i1.x),
            fmt_num(i1.y),
            fmt_num(i0.x),
            fmt_num(i0.y),
            r = fmt_num(outer),
            ri = fmt_num(inner),
            large = large,
        )
    } else {
        format!(
            "M{},{}A{r},{r},0,{large},1,{},{}L0,0Z",
            fmt_num(o0.x),
            fmt_num(o0.y),
            fmt_num(o1.x),
            fmt_num(o1.y),
            r = fmt_num(outer),
            large = large,
        )
    }
}

fn full_circle(r: f64, clockwise: bool) -> String {
    let sweep = if clockwise { 1 } else { 0 };
    format!(
        "M0,-{r}A{r},{r},0,1,{sweep},0,{r}A{r},{r},0,1,{sweep},0,-{r}",
        r = fmt_num(r),
        sweep = sweep,
    )
}

/// Label anchor for a wedge: the half-way angle at the half-way radius
/// (d3 `arc.centroid`).
pub fn wedge_centroid(outer: f64, inner: f64, start: f64, end: f64) -> Point {
    wedge_point((inner + outer) / 2.0, (start + end) / 2.0)
}

/// d3-path rounds path numbers to 3 fractional digits, ties half-up
/// (including for negatives, like JS `Math.round`). Non-finite coordinates
/// print as 0 so malformed rows degrade instead of corrupting the path.
pub(crate) fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.abs() < 0.0005 {
        return "0".to_string();
    }

    let mut r = (v * 1000.0 + 0.5).floor() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }

    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}
