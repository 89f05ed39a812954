//! Monitoring-site records as attached to map markers.
//!
//! Each marker carries its full `SiteRecord` as Plotly customdata, so a
//! click event hands the popup everything it needs without a lookup. The
//! attribute bag varies by provider: CA DWR wells report location/basin
//! detail and percentile statistics, USGS wells report an aquifer-type flag.

use crate::percentile::{class_color, classify_depth, PercentileBands};
use serde::{Deserialize, Serialize};

/// Data provider for a monitoring site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteSource {
    #[serde(rename = "CADWR")]
    Cadwr,
    #[serde(rename = "USGS")]
    Usgs,
}

impl SiteSource {
    /// Badge label shown in the popup header.
    pub fn label(&self) -> &'static str {
        match self {
            SiteSource::Cadwr => "CA DWR",
            SiteSource::Usgs => "USGS",
        }
    }

    /// Badge background color (CA DWR green, USGS blue).
    pub fn badge_color(&self) -> &'static str {
        match self {
            SiteSource::Cadwr => "#4CAF50",
            SiteSource::Usgs => "#1976D2",
        }
    }
}

/// One groundwater monitoring well. Immutable once deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub site_no: String,
    #[serde(default)]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub source: SiteSource,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub basin_name: Option<String>,
    #[serde(default)]
    pub well_use: Option<String>,
    #[serde(default)]
    pub measurement_date: Option<String>,
    /// Current depth to water in feet (larger = drier).
    #[serde(default)]
    pub depth_ft: Option<f64>,
    /// Groundwater elevation in feet.
    #[serde(default)]
    pub gwe_ft: Option<f64>,
    /// Ground surface elevation in feet.
    #[serde(default)]
    pub gse_ft: Option<f64>,
    #[serde(default)]
    pub well_depth_ft: Option<f64>,
    #[serde(default)]
    pub pct_lowest: Option<f64>,
    #[serde(default)]
    pub pct_10: Option<f64>,
    #[serde(default)]
    pub pct_25: Option<f64>,
    #[serde(default)]
    pub pct_50: Option<f64>,
    #[serde(default)]
    pub pct_75: Option<f64>,
    #[serde(default)]
    pub pct_90: Option<f64>,
    #[serde(default)]
    pub pct_highest: Option<f64>,
    #[serde(default)]
    pub percentile_class: Option<String>,
    #[serde(default)]
    pub percentile_class_code: Option<i64>,
    #[serde(default)]
    pub measurement_count: Option<i64>,
    /// Aquifer type reported by USGS sites ("confined"/"unconfined").
    #[serde(default)]
    pub aquifer_type: Option<String>,
}

impl SiteRecord {
    /// Parse a record from marker customdata JSON.
    pub fn from_customdata(json: &str) -> anyhow::Result<SiteRecord> {
        Ok(serde_json::from_str(json)?)
    }

    /// Name shown in the popup header, falling back to the site number.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.site_no
        } else {
            &self.name
        }
    }

    /// The full seven-point distribution, or `None` if any field is absent.
    pub fn percentile_bands(&self) -> Option<PercentileBands> {
        Some(PercentileBands {
            lowest: self.pct_lowest?,
            p10: self.pct_10?,
            p25: self.pct_25?,
            p50: self.pct_50?,
            p75: self.pct_75?,
            p90: self.pct_90?,
            highest: self.pct_highest?,
        })
    }

    /// Display color for this site's percentile class.
    pub fn class_display_color(&self) -> &'static str {
        class_color(self.percentile_class_code)
    }

    /// Recompute the percentile class label from the current depth, as the
    /// reported label can lag the latest measurement.
    pub fn computed_class(&self) -> Option<String> {
        let depth = self.depth_ft?;
        let boundaries = [
            (0, self.pct_lowest),
            (10, self.pct_10),
            (25, self.pct_25),
            (50, self.pct_50),
            (75, self.pct_75),
            (90, self.pct_90),
            (100, self.pct_highest),
        ];
        classify_depth(depth, &boundaries).map(|(label, _)| label)
    }

    /// (label, value) pairs for the popup info table. Absent attributes are
    /// omitted rather than rendered empty.
    pub fn info_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        rows.push(("Site", self.site_no.clone()));
        if let Some(county) = &self.county {
            if !county.is_empty() {
                rows.push(("County", county.clone()));
            }
        }
        if let Some(basin) = &self.basin_name {
            if !basin.is_empty() {
                rows.push(("Basin", basin.clone()));
            }
        }
        if let Some(use_) = &self.well_use {
            if !use_.is_empty() {
                rows.push(("Well use", use_.clone()));
            }
        }
        if let Some(aquifer) = &self.aquifer_type {
            if !aquifer.is_empty() {
                rows.push(("Aquifer", aquifer.clone()));
            }
        }
        if let Some(date) = &self.measurement_date {
            rows.push(("Measured", date.clone()));
        }
        if let Some(depth) = self.depth_ft {
            rows.push(("Depth to water", format!("{:.1} ft", depth)));
        }
        if let Some(gwe) = self.gwe_ft {
            rows.push(("Groundwater elevation", format!("{:.1} ft", gwe)));
        }
        if let Some(gse) = self.gse_ft {
            rows.push(("Ground surface elevation", format!("{:.1} ft", gse)));
        }
        if let Some(depth) = self.well_depth_ft {
            rows.push(("Well depth", format!("{:.0} ft", depth)));
        }
        if let Some(class) = self.computed_class().or_else(|| self.percentile_class.clone()) {
            if !class.is_empty() {
                rows.push(("Percentile class", class));
            }
        }
        if let Some(count) = self.measurement_count {
            rows.push(("Measurements", count.to_string()));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_record() -> SiteRecord {
        serde_json::from_str(
            r#"{"site_no":"384121N1214550W001","lat":38.69,"lon":-121.76,"source":"CADWR"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_customdata_round_trip() {
        let record = minimal_record();
        assert_eq!(record.site_no, "384121N1214550W001");
        assert_eq!(record.source, SiteSource::Cadwr);
        assert_eq!(record.display_name(), "384121N1214550W001");
        assert!(record.county.is_none());
    }

    #[test]
    fn test_percentile_bands_all_or_nothing() {
        let mut record = minimal_record();
        record.pct_lowest = Some(80.0);
        record.pct_10 = Some(95.0);
        record.pct_25 = Some(105.0);
        record.pct_50 = Some(115.0);
        record.pct_75 = Some(130.0);
        record.pct_90 = Some(145.0);
        assert!(record.percentile_bands().is_none());

        record.pct_highest = Some(160.0);
        let bands = record.percentile_bands().unwrap();
        assert_eq!(bands.chart_values()[0], 160.0);
        assert_eq!(bands.chart_values()[6], 80.0);
    }

    #[test]
    fn test_info_rows_skip_absent_attributes() {
        let record = minimal_record();
        let rows = record.info_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "Site");
    }

    #[test]
    fn test_info_rows_include_present_attributes() {
        let mut record = minimal_record();
        record.county = Some("Yolo".to_string());
        record.depth_ft = Some(120.5);
        record.measurement_count = Some(312);
        let rows = record.info_rows();
        assert!(rows.iter().any(|(l, v)| *l == "County" && v == "Yolo"));
        assert!(rows.iter().any(|(l, v)| *l == "Depth to water" && v == "120.5 ft"));
        assert!(rows.iter().any(|(l, v)| *l == "Measurements" && v == "312"));
    }

    #[test]
    fn test_source_badges() {
        assert_eq!(SiteSource::Cadwr.badge_color(), "#4CAF50");
        assert_eq!(SiteSource::Usgs.label(), "USGS");
    }
}
