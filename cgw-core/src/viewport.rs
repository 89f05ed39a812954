//! Viewport ownership and zoom/home commands.

use crate::geo::{meters_per_pixel, pick_scale_rung, LatLon, ScaleRung, Viewport};
use crate::surface::MapSurface;

const ZOOM_STEP: f64 = 1.0;

/// Owns the controller's belief about the current viewport and issues
/// relayout commands. External pans/zooms are reconciled through
/// [`ViewportController::on_external_relayout`], which is the single
/// synchronization point against drift between this state and the
/// rendered map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportController {
    current: Viewport,
    home: Viewport,
}

impl ViewportController {
    pub fn new(home: Viewport) -> Self {
        Self {
            current: home,
            home,
        }
    }

    pub fn current(&self) -> Viewport {
        self.current
    }

    pub fn home(&self) -> Viewport {
        self.home
    }

    /// Scale rung for the current viewport.
    pub fn scale_rung(&self) -> ScaleRung {
        pick_scale_rung(meters_per_pixel(self.current.zoom, self.current.center.lat))
    }

    pub fn zoom_in(&mut self, surface: &mut dyn MapSurface) {
        self.zoom_by(surface, ZOOM_STEP);
    }

    pub fn zoom_out(&mut self, surface: &mut dyn MapSurface) {
        self.zoom_by(surface, -ZOOM_STEP);
    }

    /// Jump back to the home viewport.
    pub fn go_home(&mut self, surface: &mut dyn MapSurface) {
        surface.relayout(&self.home);
        self.current = self.home;
    }

    /// The map reported a viewport change we did not originate (drag,
    /// scroll, pinch). Adopt it and return the recomputed scale rung.
    /// Relayout events may carry only one of zoom/center.
    pub fn on_external_relayout(
        &mut self,
        zoom: Option<f64>,
        center: Option<LatLon>,
    ) -> ScaleRung {
        let new_center = center.unwrap_or(self.current.center);
        let new_zoom = zoom.unwrap_or(self.current.zoom);
        self.current = Viewport::clamped(new_center, new_zoom);
        self.scale_rung()
    }

    fn zoom_by(&mut self, surface: &mut dyn MapSurface, step: f64) {
        // Read the live view first; the map may have been panned/zoomed
        // since our last command.
        let base = surface.view().unwrap_or_else(|| {
            log::debug!("map surface not ready, using last known viewport");
            self.current
        });
        let target = base.with_zoom(base.zoom + step);
        surface.relayout(&target);
        self.current = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{MAX_ZOOM, MIN_ZOOM};
    use crate::surface::SeriesCoords;

    /// Records relayout requests; optionally reports a live view.
    struct StubMap {
        live: Option<Viewport>,
        relayouts: Vec<Viewport>,
    }

    impl StubMap {
        fn new(live: Option<Viewport>) -> Self {
            Self {
                live,
                relayouts: Vec::new(),
            }
        }
    }

    impl MapSurface for StubMap {
        fn view(&self) -> Option<Viewport> {
            self.live
        }

        fn relayout(&mut self, view: &Viewport) {
            self.relayouts.push(*view);
            self.live = Some(*view);
        }

        fn series_coords(&self, _name: &str) -> Option<SeriesCoords> {
            None
        }

        fn set_series_coords(&mut self, _name: &str, _coords: &SeriesCoords) {}
    }

    fn home() -> Viewport {
        Viewport::clamped(LatLon::new(38.5, -121.7), 9.0)
    }

    #[test]
    fn test_zoom_in_then_out_is_identity() {
        let mut surface = StubMap::new(Some(home()));
        let mut vc = ViewportController::new(home());
        vc.zoom_in(&mut surface);
        assert_eq!(vc.current().zoom, 10.0);
        vc.zoom_out(&mut surface);
        assert_eq!(vc.current().zoom, 9.0);
        assert_eq!(surface.relayouts.len(), 2);
    }

    #[test]
    fn test_zoom_clamps_at_boundaries() {
        let top = Viewport::clamped(LatLon::new(38.5, -121.7), MAX_ZOOM);
        let mut surface = StubMap::new(Some(top));
        let mut vc = ViewportController::new(top);
        vc.zoom_in(&mut surface);
        assert_eq!(vc.current().zoom, MAX_ZOOM);

        let bottom = Viewport::clamped(LatLon::new(38.5, -121.7), MIN_ZOOM);
        let mut surface = StubMap::new(Some(bottom));
        let mut vc = ViewportController::new(bottom);
        vc.zoom_out(&mut surface);
        assert_eq!(vc.current().zoom, MIN_ZOOM);
    }

    #[test]
    fn test_zoom_preserves_externally_panned_center() {
        // The live view has drifted; zoom must keep the drifted center.
        let drifted = Viewport::clamped(LatLon::new(37.0, -120.0), 11.0);
        let mut surface = StubMap::new(Some(drifted));
        let mut vc = ViewportController::new(home());
        vc.zoom_in(&mut surface);
        assert_eq!(vc.current().center, drifted.center);
        assert_eq!(vc.current().zoom, 12.0);
    }

    #[test]
    fn test_zoom_falls_back_when_surface_not_ready() {
        let mut surface = StubMap::new(None);
        let mut vc = ViewportController::new(home());
        vc.zoom_in(&mut surface);
        assert_eq!(vc.current().zoom, 10.0);
        assert_eq!(surface.relayouts.len(), 1);
    }

    #[test]
    fn test_go_home_resets_state() {
        let drifted = Viewport::clamped(LatLon::new(35.0, -118.0), 14.0);
        let mut surface = StubMap::new(Some(drifted));
        let mut vc = ViewportController::new(home());
        vc.on_external_relayout(Some(14.0), Some(drifted.center));
        vc.go_home(&mut surface);
        assert_eq!(vc.current(), home());
        assert_eq!(surface.relayouts.last(), Some(&home()));
    }

    #[test]
    fn test_external_relayout_partial_updates() {
        let mut vc = ViewportController::new(home());
        let rung = vc.on_external_relayout(Some(12.0), None);
        assert_eq!(vc.current().zoom, 12.0);
        assert_eq!(vc.current().center, home().center);
        assert!(rung.px >= 50.0 && rung.px <= 150.0);

        vc.on_external_relayout(None, Some(LatLon::new(36.0, -119.0)));
        assert_eq!(vc.current().zoom, 12.0);
        assert_eq!(vc.current().center.lat, 36.0);
    }
}
