//! The message protocol between the plugin UI and the plugin runtime.
//!
//! The UI builds charts and posts them as `create-chart` messages; the
//! runtime answers theme changes with `theme` messages. Both travel as JSON
//! with a `type` tag.

use serde::{Deserialize, Serialize};

use penplot_core::{ChartResult, Result};

use crate::host::{HostDocument, insert_chart};

/// Board size for an incoming chart, carried alongside the chart itself
/// because the SVG width/height are buried in the serialized document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PluginMessage {
    #[serde(rename = "create-chart")]
    CreateChart {
        content: ChartResult,
        dimensions: ChartDimensions,
    },
    #[serde(rename = "theme")]
    Theme { content: String },
}

impl PluginMessage {
    pub fn create_chart(content: ChartResult, width: f64, height: f64) -> Self {
        PluginMessage::CreateChart {
            content,
            dimensions: ChartDimensions { width, height },
        }
    }

    pub fn theme(content: impl Into<String>) -> Self {
        PluginMessage::Theme {
            content: content.into(),
        }
    }

    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Applies one inbound message to the host document. `theme` messages carry
/// no document work; they are logged and dropped.
pub fn handle_message<H: HostDocument>(host: &mut H, message: &PluginMessage) {
    match message {
        PluginMessage::CreateChart {
            content,
            dimensions,
        } => {
            insert_chart(host, content, dimensions.width, dimensions.height);
        }
        PluginMessage::Theme { content } => {
            tracing::debug!(theme = %content, "theme message ignored by the document side");
        }
    }
}
