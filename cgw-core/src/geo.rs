//! Viewport state and Web Mercator scale math.

use serde::{Deserialize, Serialize};

/// Ground resolution at the equator for zoom 0 with 256px tiles, in
/// meters per pixel.
const EQUATOR_METERS_PER_PIXEL: f64 = 156_543.033_92;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 20.0;

/// Scale bar width window in pixels.
const MIN_BAR_PX: f64 = 50.0;
const MAX_BAR_PX: f64 = 150.0;

/// Candidate scale bar rungs, largest first.
const SCALE_RUNGS: [(f64, &str); 15] = [
    (5_000_000.0, "5000 km"),
    (2_000_000.0, "2000 km"),
    (1_000_000.0, "1000 km"),
    (500_000.0, "500 km"),
    (200_000.0, "200 km"),
    (100_000.0, "100 km"),
    (50_000.0, "50 km"),
    (20_000.0, "20 km"),
    (10_000.0, "10 km"),
    (5_000.0, "5 km"),
    (2_000.0, "2 km"),
    (1_000.0, "1 km"),
    (500.0, "500 m"),
    (200.0, "200 m"),
    (100.0, "100 m"),
];

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The map's visible center and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLon,
    pub zoom: f64,
}

impl Viewport {
    /// Build a viewport with the zoom clamped into [`MIN_ZOOM`, `MAX_ZOOM`].
    pub fn clamped(center: LatLon, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// The same viewport at a clamped new zoom, center unchanged.
    pub fn with_zoom(&self, zoom: f64) -> Self {
        Self::clamped(self.center, zoom)
    }
}

/// Ground distance covered by one screen pixel at the given zoom and
/// latitude.
pub fn meters_per_pixel(zoom: f64, lat: f64) -> f64 {
    EQUATOR_METERS_PER_PIXEL * (lat * std::f64::consts::PI / 180.0).cos() / 2f64.powf(zoom)
}

/// A selected scale bar rung: the ground distance it represents, its
/// display label, and its on-screen width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRung {
    pub meters: f64,
    pub label: &'static str,
    pub px: f64,
}

/// Pick the scale bar rung for the given ground resolution.
///
/// Prefers the largest rung whose on-screen width lands in the
/// [50, 150] px window. When no rung fits the window, the last rung still
/// at least 50 px wide wins, and the smallest rung is the fallback at the
/// table extremes. The bar therefore never collapses or overflows within
/// the supported zoom range.
pub fn pick_scale_rung(meters_per_pixel: f64) -> ScaleRung {
    let rung_at = |(meters, label): (f64, &'static str)| ScaleRung {
        meters,
        label,
        px: meters / meters_per_pixel,
    };

    let mut chosen = rung_at(SCALE_RUNGS[SCALE_RUNGS.len() - 1]);
    for candidate in SCALE_RUNGS {
        let rung = rung_at(candidate);
        if rung.px >= MIN_BAR_PX && rung.px <= MAX_BAR_PX {
            return rung;
        }
        if rung.px >= MIN_BAR_PX {
            chosen = rung;
        }
    }
    chosen
}
