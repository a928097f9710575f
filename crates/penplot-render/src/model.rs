use penplot_core::TextLabel;
use serde::{Deserialize, Serialize};

/// The scene graph one composer emits. The SVG serializer walks it without
/// taking further layout decisions, so every coordinate here is final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub nodes: Vec<DrawNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

fn opacity_one() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawNode {
    Group {
        #[serde(default)]
        class: Option<String>,
        /// Translation applied to every child, emitted as an SVG `transform`.
        #[serde(default)]
        translate: Option<(f64, f64)>,
        nodes: Vec<DrawNode>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        #[serde(default)]
        fill: Option<String>,
        #[serde(default)]
        stroke: Option<Stroke>,
        #[serde(default = "opacity_one")]
        opacity: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
        #[serde(default = "opacity_one")]
        opacity: f64,
    },
    Path {
        d: String,
        #[serde(default)]
        fill: Option<String>,
        #[serde(rename = "fillOpacity", default)]
        fill_opacity: Option<f64>,
        #[serde(default)]
        stroke: Option<Stroke>,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        fill: String,
        #[serde(rename = "fontSize")]
        font_size: f64,
        anchor: TextAnchor,
    },
}

impl DrawNode {
    pub fn group(nodes: Vec<DrawNode>) -> Self {
        DrawNode::Group {
            class: None,
            translate: None,
            nodes,
        }
    }

    pub fn translated_group(tx: f64, ty: f64, nodes: Vec<DrawNode>) -> Self {
        DrawNode::Group {
            class: None,
            translate: Some((tx, ty)),
            nodes,
        }
    }

    pub fn class_group(class: impl Into<String>, nodes: Vec<DrawNode>) -> Self {
        DrawNode::Group {
            class: Some(class.into()),
            translate: None,
            nodes,
        }
    }
}

/// A composed chart: the drawing to serialize plus the labels the host
/// composites over it as native text nodes. Label coordinates live in the
/// same space as the drawing root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartScene {
    pub drawing: Drawing,
    pub labels: Vec<TextLabel>,
}
