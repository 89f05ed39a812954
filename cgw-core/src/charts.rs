//! Chart spec builders for the popup.
//!
//! Specs are Plotly trace/layout JSON assembled with `serde_json::json!`
//! and handed to the plotting surface as strings. Building is pure and
//! fully testable; drawing is the surface's job.

use cgw_data::percentile::{PERCENTILE_CHART_LABELS, PERCENTILE_CHART_SCHEME};
use cgw_data::{SiteRecord, TimeSeries};
use serde_json::{json, Value};

/// Axis margin applied beyond the data extremes.
const AXIS_MARGIN: f64 = 0.15;

/// Height clamp windows in display units.
const PERCENTILE_HEIGHT: (f64, f64) = (160.0, 200.0);
const TIME_SERIES_HEIGHT: (f64, f64) = (180.0, 220.0);

/// Height follows container width at a fixed aspect ratio.
const HEIGHT_ASPECT: f64 = 0.42;

/// A chart ready for the plotting surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub traces: Vec<Value>,
    pub layout: Value,
    pub height: f64,
}

impl ChartSpec {
    pub fn traces_json(&self) -> String {
        serde_json::to_string(&self.traces).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn layout_json(&self) -> String {
        self.layout.to_string()
    }
}

fn chart_height(container_width: f64, (lo, hi): (f64, f64)) -> f64 {
    (container_width * HEIGHT_ASPECT).clamp(lo, hi)
}

/// Translucent fill tint derived from a "#RRGGBB" line color.
fn rgba_tint(hex: &str, alpha: f64) -> String {
    let channels = hex
        .strip_prefix('#')
        .filter(|h| h.len() == 6)
        .and_then(|h| {
            let r = u8::from_str_radix(&h[0..2], 16).ok()?;
            let g = u8::from_str_radix(&h[2..4], 16).ok()?;
            let b = u8::from_str_radix(&h[4..6], 16).ok()?;
            Some((r, g, b))
        });
    match channels {
        Some((r, g, b)) => format!("rgba({},{},{},{})", r, g, b, alpha),
        None => format!("rgba(120,120,120,{})", alpha),
    }
}

/// Build the percentile distribution bar chart for a site.
///
/// All seven percentile fields must be present; otherwise no chart is
/// built at all. When the current depth is known a dotted reference line
/// marks it across the bars.
pub fn percentile_spec(record: &SiteRecord, container_width: f64) -> Option<ChartSpec> {
    let bands = record.percentile_bands()?;
    let values = bands.chart_values();

    let mut lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if let Some(depth) = record.depth_ft {
        lo = lo.min(depth);
        hi = hi.max(depth);
    }
    let range = [lo * (1.0 - AXIS_MARGIN), hi * (1.0 + AXIS_MARGIN)];

    let trace = json!({
        "type": "bar",
        "orientation": "h",
        "y": PERCENTILE_CHART_LABELS,
        "x": values,
        "marker": { "color": PERCENTILE_CHART_SCHEME },
        "hovertemplate": "%{y}: %{x:.1f} ft<extra></extra>",
    });

    let height = chart_height(container_width, PERCENTILE_HEIGHT);
    let mut layout = json!({
        "height": height,
        "margin": { "l": 52, "r": 12, "t": 8, "b": 28 },
        "xaxis": {
            "title": { "text": "Depth to water (ft)", "font": { "size": 10 } },
            "range": range,
            "tickfont": { "size": 9 },
        },
        "yaxis": { "tickfont": { "size": 9 }, "autorange": "reversed" },
        "showlegend": false,
        "bargap": 0.25,
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
    });

    if let Some(depth) = record.depth_ft {
        layout["shapes"] = json!([{
            "type": "line",
            "x0": depth,
            "x1": depth,
            "y0": -0.5,
            "y1": 6.5,
            "line": { "color": "#333", "width": 2, "dash": "dot" },
        }]);
        layout["annotations"] = json!([{
            "x": depth,
            "y": -0.5,
            "yanchor": "top",
            "text": "current",
            "showarrow": false,
            "font": { "size": 9, "color": "#333" },
        }]);
    }

    Some(ChartSpec {
        traces: vec![trace],
        layout,
        height,
    })
}

/// Build the depth-over-time line chart for a site.
///
/// Depth to water grows downward, so the value axis is reversed. The area
/// under the line is filled with a translucent tint of the line color.
pub fn time_series_spec(
    ts: &TimeSeries,
    color_hint: &str,
    container_width: f64,
) -> Option<ChartSpec> {
    if !ts.is_usable() {
        return None;
    }

    let trace = json!({
        "type": "scatter",
        "mode": "lines+markers",
        "x": ts.dates,
        "y": ts.values,
        "line": { "color": color_hint, "width": 2 },
        "marker": { "size": 4 },
        "fill": "tozeroy",
        "fillcolor": rgba_tint(color_hint, 0.15),
        "hovertemplate": "%{x}<br>%{y:.1f} ft<extra></extra>",
    });

    let height = chart_height(container_width, TIME_SERIES_HEIGHT);
    let layout = json!({
        "height": height,
        "margin": { "l": 46, "r": 12, "t": 8, "b": 32 },
        "xaxis": { "tickfont": { "size": 9 } },
        "yaxis": {
            "title": { "text": "Depth to water (ft)", "font": { "size": 10 } },
            "autorange": "reversed",
            "tickfont": { "size": 9 },
        },
        "showlegend": false,
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
    });

    Some(ChartSpec {
        traces: vec![trace],
        layout,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_bands() -> SiteRecord {
        serde_json::from_str(
            r#"{
                "site_no": "384121N1214550W001",
                "lat": 38.69, "lon": -121.76, "source": "CADWR",
                "depth_ft": 120.5,
                "pct_lowest": 80.0, "pct_10": 95.0, "pct_25": 105.0,
                "pct_50": 115.0, "pct_75": 130.0, "pct_90": 145.0,
                "pct_highest": 160.0,
                "percentile_class": "25-50"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_percentile_spec_axis_margin_and_reference_line() {
        let spec = percentile_spec(&record_with_bands(), 420.0).unwrap();
        let range = spec.layout["xaxis"]["range"].as_array().unwrap();
        assert!((range[1].as_f64().unwrap() - 160.0 * 1.15).abs() < 1e-9);
        assert!((range[0].as_f64().unwrap() - 80.0 * 0.85).abs() < 1e-9);

        let shape = &spec.layout["shapes"][0];
        assert_eq!(shape["x0"].as_f64().unwrap(), 120.5);
        assert_eq!(shape["x1"].as_f64().unwrap(), 120.5);
    }

    #[test]
    fn test_percentile_spec_is_all_or_nothing() {
        let mut record = record_with_bands();
        record.pct_50 = None;
        assert!(percentile_spec(&record, 420.0).is_none());
    }

    #[test]
    fn test_percentile_spec_marker_extends_range() {
        let mut record = record_with_bands();
        record.depth_ft = Some(200.0);
        let spec = percentile_spec(&record, 420.0).unwrap();
        let range = spec.layout["xaxis"]["range"].as_array().unwrap();
        assert!((range[1].as_f64().unwrap() - 200.0 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_spec_without_depth_has_no_marker() {
        let mut record = record_with_bands();
        record.depth_ft = None;
        let spec = percentile_spec(&record, 420.0).unwrap();
        assert!(spec.layout.get("shapes").is_none());
    }

    #[test]
    fn test_percentile_height_clamp() {
        assert_eq!(percentile_spec(&record_with_bands(), 100.0).unwrap().height, 160.0);
        assert_eq!(percentile_spec(&record_with_bands(), 2000.0).unwrap().height, 200.0);
        let mid = percentile_spec(&record_with_bands(), 420.0).unwrap().height;
        assert!((mid - 420.0 * 0.42).abs() < 1e-9);
    }

    #[test]
    fn test_time_series_spec_reversed_axis_and_tint() {
        let ts = TimeSeries {
            dates: vec!["2023-01-01".into(), "2023-02-01".into(), "2023-03-01".into()],
            values: vec![10.0, 12.0, 8.0],
        };
        let spec = time_series_spec(&ts, "#1565C0", 460.0).unwrap();
        assert_eq!(spec.layout["yaxis"]["autorange"], "reversed");
        assert_eq!(spec.traces[0]["fillcolor"], "rgba(21,101,192,0.15)");
        assert_eq!(spec.traces[0]["fill"], "tozeroy");
        assert!(spec.height >= 180.0 && spec.height <= 220.0);
    }

    #[test]
    fn test_time_series_spec_rejects_empty_series() {
        let ts = TimeSeries {
            dates: vec![],
            values: vec![],
        };
        assert!(time_series_spec(&ts, "#1565C0", 460.0).is_none());
    }

    #[test]
    fn test_rgba_tint_falls_back_on_bad_hex() {
        assert_eq!(rgba_tint("#xyzxyz", 0.15), "rgba(120,120,120,0.15)");
        assert_eq!(rgba_tint("blue", 0.15), "rgba(120,120,120,0.15)");
    }
}
