//! Seams to the rendered map and chart surfaces.
//!
//! The production implementations live in `cgw-map-ui::js_bridge` and talk
//! to Plotly; tests substitute recording stubs. Both traits are
//! object-safe so controllers can take `&mut dyn ...`.

use crate::charts::ChartSpec;
use crate::geo::Viewport;

/// Coordinate arrays of one marker series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesCoords {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
}

impl SeriesCoords {
    pub fn is_empty(&self) -> bool {
        self.lat.is_empty() && self.lon.is_empty()
    }
}

/// The rendered map: viewport commands and per-series restyling.
pub trait MapSurface {
    /// The currently rendered viewport, or `None` while the surface is not
    /// ready.
    fn view(&self) -> Option<Viewport>;

    /// Request a viewport change. Implementations absorb not-ready races.
    fn relayout(&mut self, view: &Viewport);

    /// Coordinate arrays of the named series, or `None` when the series is
    /// unknown or the surface is not ready.
    fn series_coords(&self, name: &str) -> Option<SeriesCoords>;

    /// Replace the named series' coordinate arrays.
    fn set_series_coords(&mut self, name: &str, coords: &SeriesCoords);
}

/// The chart plotting surface inside the popup.
pub trait ChartSurface {
    /// Draw a chart into the named region. Implementations pin the region
    /// height to the rendered height once the first paint commits.
    fn draw(&mut self, region: &str, spec: &ChartSpec);

    /// Cheap relayout of an already-drawn chart to its region's current
    /// size (used live during popup resize).
    fn reflow(&mut self, region: &str);

    /// Tear down whatever is drawn in the region.
    fn clear(&mut self, region: &str);
}
