//! Serializes a [`Drawing`] into a standalone `<svg>` string.
//!
//! The output is what the host's shape importer consumes, so the markup is
//! deliberately plain: no stylesheet, no `defs`, every attribute inline.

use std::fmt::Write as _;

use crate::model::{DrawNode, Drawing, Stroke, TextAnchor};

/// Writes `drawing` as a self-contained SVG document string.
pub fn render_drawing(drawing: &Drawing) -> String {
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"#,
        w = fmt(drawing.width),
        h = fmt(drawing.height),
    );
    for node in &drawing.nodes {
        write_node(&mut out, node);
    }
    out.push_str("</svg>");
    out
}

fn write_node(out: &mut String, node: &DrawNode) {
    match node {
        DrawNode::Group {
            class,
            translate,
            nodes,
        } => {
            out.push_str("<g");
            if let Some(class) = class {
                let _ = write!(out, r#" class="{}""#, escape_xml(class));
            }
            if let Some((tx, ty)) = translate {
                let _ = write!(
                    out,
                    r#" transform="translate({x},{y})""#,
                    x = fmt(*tx),
                    y = fmt(*ty),
                );
            }
            out.push('>');
            for child in nodes {
                write_node(out, child);
            }
            out.push_str("</g>");
        }
        DrawNode::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}"/>"#,
                x = fmt(*x),
                y = fmt(*y),
                w = fmt(*width),
                h = fmt(*height),
                fill = escape_xml(fill),
            );
        }
        DrawNode::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            opacity,
        } => {
            let _ = write!(
                out,
                r#"<circle cx="{cx}" cy="{cy}" r="{r}""#,
                cx = fmt(*cx),
                cy = fmt(*cy),
                r = fmt(*r),
            );
            write_fill(out, fill.as_deref());
            if let Some(stroke) = stroke {
                write_stroke(out, stroke);
            }
            write_opacity(out, *opacity);
            out.push_str("/>");
        }
        DrawNode::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            opacity,
        } => {
            let _ = write!(
                out,
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}""#,
                x1 = fmt(*x1),
                y1 = fmt(*y1),
                x2 = fmt(*x2),
                y2 = fmt(*y2),
            );
            write_stroke(out, stroke);
            write_opacity(out, *opacity);
            out.push_str("/>");
        }
        DrawNode::Path {
            d,
            fill,
            fill_opacity,
            stroke,
        } => {
            let _ = write!(out, r#"<path d="{}""#, escape_xml(d));
            write_fill(out, fill.as_deref());
            if let Some(fo) = fill_opacity {
                let _ = write!(out, r#" fill-opacity="{}""#, fmt(*fo));
            }
            if let Some(stroke) = stroke {
                write_stroke(out, stroke);
            }
            out.push_str("/>");
        }
        DrawNode::Text {
            text,
            x,
            y,
            fill,
            font_size,
            anchor,
        } => {
            let _ = write!(
                out,
                r#"<text x="{x}" y="{y}" fill="{fill}" font-size="{size}" font-family="sans-serif""#,
                x = fmt(*x),
                y = fmt(*y),
                fill = escape_xml(fill),
                size = fmt(*font_size),
            );
            match anchor {
                // `start` is the SVG default.
                TextAnchor::Start => {}
                TextAnchor::Middle => out.push_str(r#" text-anchor="middle""#),
                TextAnchor::End => out.push_str(r#" text-anchor="end""#),
            }
            let _ = write!(out, ">{}</text>", escape_xml(text));
        }
    }
}

fn write_fill(out: &mut String, fill: Option<&str>) {
    match fill {
        Some(color) => {
            let _ = write!(out, r#" fill="{}""#, escape_xml(color));
        }
        None => out.push_str(r#" fill="none""#),
    }
}

fn write_stroke(out: &mut String, stroke: &Stroke) {
    let _ = write!(
        out,
        r#" stroke="{color}" stroke-width="{width}""#,
        color = escape_xml(&stroke.color),
        width = fmt(stroke.width),
    );
}

fn write_opacity(out: &mut String, opacity: f64) {
    if opacity != 1.0 {
        let _ = write!(out, r#" opacity="{}""#, fmt(opacity));
    }
}

/// SVG attribute numbers use the shortest round-trippable decimal form
/// (JS `Number#toString()` semantics, via ryu-js), with `-0` and tiny float
/// noise from our own arithmetic normalized away first.
pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let mut buf = ryu_js::Buffer::new();
    buf.format_finite(v).to_string()
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
