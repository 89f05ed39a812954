//! Startup configuration handed over by the page-assembly step.
//!
//! The map page embeds a single JSON object: the home viewport, the per-site
//! time series, and the layer descriptors used to build the toggle panel.
//! Keys are camelCase because the same object is consumed by the page's
//! inline bootstrap script.

use crate::timeseries::TimeSeries;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One toggleable marker layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerInfo {
    /// Series name on the map surface; also the toggle id.
    pub name: String,
    #[serde(default)]
    pub label: String,
    /// Swatch color in the layer panel.
    #[serde(default)]
    pub color: String,
    /// Number of sites in the layer.
    #[serde(default)]
    pub count: usize,
}

impl LayerInfo {
    /// Panel label, falling back to the series name.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

/// The full startup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub home_lat: f64,
    pub home_lon: f64,
    pub home_zoom: f64,
    #[serde(default)]
    pub region_name: String,
    #[serde(default)]
    pub data_period: String,
    #[serde(default)]
    pub time_series: HashMap<String, TimeSeries>,
    #[serde(default)]
    pub layers: Vec<LayerInfo>,
}

impl MapConfig {
    /// Parse the embedded configuration JSON.
    pub fn from_json(json: &str) -> anyhow::Result<MapConfig> {
        serde_json::from_str(json).context("failed to parse map configuration")
    }

    /// Time series for a site, if one was collected and is usable.
    pub fn series_for(&self, site_no: &str) -> Option<&TimeSeries> {
        self.time_series.get(site_no).filter(|ts| ts.is_usable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "homeLat": 38.5,
        "homeLon": -121.7,
        "homeZoom": 9,
        "regionName": "Sacramento Valley",
        "dataPeriod": "2015-01-01 ~ 2024-12-31",
        "timeSeries": {
            "384121N1214550W001": {
                "dates": ["2023-01-01", "2023-02-01"],
                "values": [104.2, 101.9]
            },
            "broken": { "dates": ["2023-01-01"], "values": [] }
        },
        "layers": [
            { "name": "CADWR", "label": "CA DWR Wells", "color": "#4CAF50", "count": 412 }
        ]
    }"##;

    #[test]
    fn test_parse_config() {
        let config = MapConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.home_zoom, 9.0);
        assert_eq!(config.layers.len(), 1);
        assert_eq!(config.layers[0].display_label(), "CA DWR Wells");
        assert_eq!(config.time_series.len(), 2);
    }

    #[test]
    fn test_series_for_filters_unusable() {
        let config = MapConfig::from_json(SAMPLE).unwrap();
        assert!(config.series_for("384121N1214550W001").is_some());
        assert!(config.series_for("broken").is_none());
        assert!(config.series_for("missing").is_none());
    }

    #[test]
    fn test_parse_config_rejects_garbage() {
        assert!(MapConfig::from_json("{not json").is_err());
        assert!(MapConfig::from_json(r#"{"homeLat": 1.0}"#).is_err());
    }
}
