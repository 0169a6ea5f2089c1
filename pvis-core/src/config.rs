//! Viewer configuration.
//!
//! A config file only needs the keys it changes; everything else keeps the
//! defaults below.

use crate::grouping::Property;
use crate::visualization::Visualization;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Treemap layout parameters passed through to D3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreemapConfig {
    pub padding_inner: u32,
    pub padding_outer: u32,
    /// Space above each group for its heading
    pub padding_top: u32,
    /// Canvas font used to measure leaf labels
    pub label_font: String,
}

impl Default for TreemapConfig {
    fn default() -> Self {
        Self {
            padding_inner: 2,
            padding_outer: 2,
            padding_top: 20,
            label_font: "bold 12pt arial".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base URL of the storage service, used by native tools
    pub server: String,
    /// Path of the dump endpoint
    pub endpoint: String,
    /// DOM id of the chart container
    pub chart_container_id: String,
    pub default_visualization: Visualization,
    pub default_property: Property,
    pub treemap: TreemapConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            server: "http://127.0.0.1:8080".to_string(),
            endpoint: "/storage/v1/dump".to_string(),
            chart_container_id: "FileEntryChart".to_string(),
            default_visualization: Visualization::TreeMap,
            default_property: Property::Key,
            treemap: TreemapConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }

    /// Absolute URL of the dump endpoint on `server`.
    pub fn dump_url(&self) -> String {
        format!(
            "{}/{}",
            self.server.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}
