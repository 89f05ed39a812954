//! Per-site depth-to-water time series and summary statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Index-aligned measurement history for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Measurement dates, "YYYY-MM-DD".
    pub dates: Vec<String>,
    /// Depth to water in feet.
    pub values: Vec<f64>,
}

/// Summary statistics for a time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    /// Last value minus first value. Negative means the water table rose
    /// over the period (an improvement).
    pub change: f64,
}

impl TimeSeriesStats {
    /// Display color for the change figure: green when depth decreased,
    /// red when it increased, gray when flat.
    pub fn change_color(&self) -> &'static str {
        if self.change < 0.0 {
            "#2E7D32"
        } else if self.change > 0.0 {
            "#C62828"
        } else {
            "#9E9E9E"
        }
    }
}

impl TimeSeries {
    /// True when the series has data and dates/values line up.
    pub fn is_usable(&self) -> bool {
        !self.values.is_empty() && self.dates.len() == self.values.len()
    }

    /// Parse a date entry, tolerating the compact "YYYYMMDD" form some
    /// providers emit.
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y%m%d"))
            .map_err(|e| anyhow::anyhow!("bad date {:?}: {}", s, e))
    }

    /// Compute min/max/avg/change, or `None` for an unusable series.
    pub fn stats(&self) -> Option<TimeSeriesStats> {
        if !self.is_usable() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        Some(TimeSeriesStats {
            min,
            max,
            avg: sum / self.values.len() as f64,
            change: self.values[self.values.len() - 1] - self.values[0],
        })
    }
}
