//! Percentile classification of depth-to-water measurements.
//!
//! A site's current depth is classed against its historical percentile
//! distribution. One implementation serves both the map marker styling and
//! the popup chart styling so the two can never disagree.

use serde::{Deserialize, Serialize};

/// Neutral gray for unranked/missing classifications.
pub const CLASS_COLOR_UNRANKED: &str = "#9E9E9E";

/// Display colors for the four classification bands.
pub const CLASS_COLOR_GOOD: &str = "#1565C0";
pub const CLASS_COLOR_NORMAL: &str = "#2E7D32";
pub const CLASS_COLOR_CAUTION: &str = "#EF6C00";
pub const CLASS_COLOR_DROUGHT: &str = "#C62828";

/// Bar colors for the seven percentile chart categories, ordered
/// Highest, 90th, 75th, 50th, 25th, 10th, Lowest (blue through red).
pub const PERCENTILE_CHART_SCHEME: [&str; 7] = [
    "#1565C0", "#1E88E5", "#43A047", "#7CB342", "#FB8C00", "#F4511E", "#C62828",
];

/// Category labels for the percentile chart, same order as the scheme.
pub const PERCENTILE_CHART_LABELS: [&str; 7] =
    ["Highest", "P90", "P75", "P50", "P25", "P10", "Lowest"];

/// The seven-point historical depth distribution of a site.
///
/// Present only when the source reported every field; partial distributions
/// are treated as absent (the percentile chart is all-or-nothing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileBands {
    pub lowest: f64,
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub highest: f64,
}

impl PercentileBands {
    /// Values in chart order (Highest first, Lowest last).
    pub fn chart_values(&self) -> [f64; 7] {
        [
            self.highest,
            self.p90,
            self.p75,
            self.p50,
            self.p25,
            self.p10,
            self.lowest,
        ]
    }
}

/// Map a 7-level percentile class code to its display color.
///
/// Codes 1-2 are "good" (blue), 3-4 "normal" (green), 5 "caution" (orange),
/// 6-7 "drought" (red). Anything else, including a missing code, is gray.
pub fn class_color(code: Option<i64>) -> &'static str {
    match code {
        Some(1) | Some(2) => CLASS_COLOR_GOOD,
        Some(3) | Some(4) => CLASS_COLOR_NORMAL,
        Some(5) => CLASS_COLOR_CAUTION,
        Some(6) | Some(7) => CLASS_COLOR_DROUGHT,
        _ => CLASS_COLOR_UNRANKED,
    }
}

/// Classify a current depth against percentile boundaries.
///
/// `boundaries` pairs each percentile rank with its (possibly missing) depth
/// value, ordered from rank 0 (deepest historical value) to rank 100
/// (shallowest). Returns the interval label (e.g. "25-50") and its midpoint
/// rank, or `None` when fewer than two boundaries carry values.
///
/// A depth beyond either end of the distribution gets an open-ended label:
/// deeper than the rank-0 boundary is "<0", shallower than rank 100 is ">100".
pub fn classify_depth(depth: f64, boundaries: &[(u32, Option<f64>)]) -> Option<(String, u32)> {
    let valid: Vec<(u32, f64)> = boundaries
        .iter()
        .filter_map(|(rank, value)| value.map(|v| (*rank, v)))
        .collect();
    if valid.len() < 2 {
        return None;
    }

    for window in valid.windows(2) {
        let (p1, v1) = window[0];
        let (p2, v2) = window[1];
        if v2 <= depth && depth <= v1 {
            return Some((format!("{}-{}", p1, p2), (p1 + p2) / 2));
        }
    }

    let (first_rank, first_value) = valid[0];
    let (last_rank, last_value) = valid[valid.len() - 1];
    if depth > first_value {
        return Some((format!("<{}", first_rank), 0));
    }
    if depth < last_value {
        return Some((format!(">{}", last_rank), 100));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundaries() -> Vec<(u32, Option<f64>)> {
        // Depth decreases as rank rises: rank 0 is the deepest on record.
        vec![
            (0, Some(160.0)),
            (10, Some(145.0)),
            (25, Some(130.0)),
            (50, Some(115.0)),
            (75, Some(105.0)),
            (90, Some(95.0)),
            (100, Some(80.0)),
        ]
    }

    #[test]
    fn test_classify_depth_interval() {
        let (label, mid) = classify_depth(120.0, &boundaries()).unwrap();
        assert_eq!(label, "25-50");
        assert_eq!(mid, 37);
    }

    #[test]
    fn test_classify_depth_deeper_than_worst() {
        let (label, mid) = classify_depth(200.0, &boundaries()).unwrap();
        assert_eq!(label, "<0");
        assert_eq!(mid, 0);
    }

    #[test]
    fn test_classify_depth_shallower_than_best() {
        let (label, mid) = classify_depth(50.0, &boundaries()).unwrap();
        assert_eq!(label, ">100");
        assert_eq!(mid, 100);
    }

    #[test]
    fn test_classify_depth_needs_two_boundaries() {
        let sparse = vec![(0, Some(160.0)), (50, None), (100, None)];
        assert_eq!(classify_depth(120.0, &sparse), None);
    }

    #[test]
    fn test_classify_depth_skips_missing_boundaries() {
        let mut b = boundaries();
        b[3] = (50, None); // interval test falls through to 25-75
        let (label, _) = classify_depth(120.0, &b).unwrap();
        assert_eq!(label, "25-75");
    }

    #[test]
    fn test_class_color_bands() {
        assert_eq!(class_color(Some(1)), CLASS_COLOR_GOOD);
        assert_eq!(class_color(Some(2)), CLASS_COLOR_GOOD);
        assert_eq!(class_color(Some(3)), CLASS_COLOR_NORMAL);
        assert_eq!(class_color(Some(4)), CLASS_COLOR_NORMAL);
        assert_eq!(class_color(Some(5)), CLASS_COLOR_CAUTION);
        assert_eq!(class_color(Some(6)), CLASS_COLOR_DROUGHT);
        assert_eq!(class_color(Some(7)), CLASS_COLOR_DROUGHT);
        assert_eq!(class_color(Some(0)), CLASS_COLOR_UNRANKED);
        assert_eq!(class_color(None), CLASS_COLOR_UNRANKED);
    }
}
