//! Marker layer visibility.
//!
//! Hiding a layer empties its coordinate arrays instead of deleting the
//! series, so the legend entry and trace index stay stable. The original
//! arrays are cached here and restored on show.

use crate::surface::{MapSurface, SeriesCoords};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct LayerController {
    hidden: HashMap<String, SeriesCoords>,
}

impl LayerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hidden(&self, layer_id: &str) -> bool {
        self.hidden.contains_key(layer_id)
    }

    /// Show or hide a layer. Toggling into the state a layer is already in
    /// is a no-op, as is showing a layer that was never hidden.
    pub fn toggle(&mut self, surface: &mut dyn MapSurface, layer_id: &str, visible: bool) {
        if visible {
            match self.hidden.remove(layer_id) {
                Some(coords) => surface.set_series_coords(layer_id, &coords),
                None => log::debug!("layer {} already visible", layer_id),
            }
            return;
        }

        if self.hidden.contains_key(layer_id) {
            log::debug!("layer {} already hidden", layer_id);
            return;
        }
        let Some(coords) = surface.series_coords(layer_id) else {
            log::warn!("cannot hide unknown layer {}", layer_id);
            return;
        };
        self.hidden.insert(layer_id.to_string(), coords);
        surface.set_series_coords(layer_id, &SeriesCoords::default());
    }
}
