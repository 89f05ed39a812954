//! Session state managed via Dioxus context.
//!
//! `MapSession` bundles the controllers and reactive signals into a single
//! struct provided via `use_context_provider`. Components retrieve it with
//! `use_context::<MapSession>()`. All mutation runs on the UI event loop;
//! the controllers themselves live in `cgw-core` and know nothing about
//! the DOM.

use crate::js_bridge::{self, PlotlyCharts, PlotlyMap};
use cgw_core::charts;
use cgw_core::popup::{Point, Size, DEFAULT_WIDTH};
use cgw_core::{
    ChartKind, ChartQueue, ChartSurface, LatLon, LayerController, PopupController, PopupGeometry,
    ResizeHandle, ScaleRung, Viewport, ViewportController,
};
use cgw_data::{MapConfig, SiteRecord};
use dioxus::prelude::*;

/// DOM ids of the popup chart regions.
pub const PERCENTILE_REGION: &str = "popup-percentile-chart";
pub const TIME_SERIES_REGION: &str = "popup-timeseries-chart";

/// Horizontal padding inside the popup body, used when a region cannot be
/// measured yet.
const POPUP_BODY_PADDING: f64 = 32.0;

/// Shared session state for the map app.
#[derive(Clone, Copy)]
pub struct MapSession {
    /// Parsed startup configuration (None until loaded)
    pub config: Signal<Option<MapConfig>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if startup failed
    pub error_msg: Signal<Option<String>>,
    /// Viewport ownership and zoom/home commands (None until config loads)
    pub viewport: Signal<Option<ViewportController>>,
    /// Marker layer visibility
    pub layers: Signal<LayerController>,
    /// Popup lifecycle state machine
    pub popup: Signal<PopupController>,
    /// Deferred chart draw tasks
    pub chart_queue: Signal<ChartQueue>,
    /// Record behind the open popup
    pub selected_site: Signal<Option<SiteRecord>>,
    /// Popup box geometry applied to the DOM
    pub popup_geometry: Signal<Option<PopupGeometry>>,
    /// False until the user resizes: the popup height follows content at
    /// open, and only becomes explicit once a resize pins it
    pub popup_height_locked: Signal<bool>,
    /// Current scale bar rung
    pub scale: Signal<Option<ScaleRung>>,
    /// Info modal visibility
    pub show_info: Signal<bool>,
}

impl MapSession {
    /// Create a new MapSession with default signal values.
    pub fn new() -> Self {
        Self {
            config: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            viewport: Signal::new(None),
            layers: Signal::new(LayerController::new()),
            popup: Signal::new(PopupController::new()),
            chart_queue: Signal::new(ChartQueue::new()),
            selected_site: Signal::new(None),
            popup_geometry: Signal::new(None),
            popup_height_locked: Signal::new(false),
            scale: Signal::new(None),
            show_info: Signal::new(false),
        }
    }

    /// Adopt a parsed configuration: seed the home viewport and the
    /// initial scale rung.
    pub fn apply_config(&mut self, config: MapConfig) {
        let home = Viewport::clamped(
            LatLon::new(config.home_lat, config.home_lon),
            config.home_zoom,
        );
        let vc = ViewportController::new(home);
        self.scale.set(Some(vc.scale_rung()));
        self.viewport.set(Some(vc));
        self.config.set(Some(config));
        self.loading.set(false);
    }

    pub fn zoom_in(&mut self) {
        if let Some(vc) = self.viewport.write().as_mut() {
            vc.zoom_in(&mut PlotlyMap);
            self.scale.set(Some(vc.scale_rung()));
        }
    }

    pub fn zoom_out(&mut self) {
        if let Some(vc) = self.viewport.write().as_mut() {
            vc.zoom_out(&mut PlotlyMap);
            self.scale.set(Some(vc.scale_rung()));
        }
    }

    pub fn go_home(&mut self) {
        if let Some(vc) = self.viewport.write().as_mut() {
            vc.go_home(&mut PlotlyMap);
            self.scale.set(Some(vc.scale_rung()));
        }
    }

    /// The map reported a user-driven viewport change.
    pub fn on_map_relayout(&mut self, event_json: &str) {
        let (zoom, center) = js_bridge::parse_relayout_event(event_json);
        if zoom.is_none() && center.is_none() {
            return;
        }
        if let Some(vc) = self.viewport.write().as_mut() {
            let rung = vc.on_external_relayout(zoom, center);
            self.scale.set(Some(rung));
        }
    }

    pub fn toggle_layer(&mut self, layer_id: &str, visible: bool) {
        self.layers.write().toggle(&mut PlotlyMap, layer_id, visible);
    }

    /// A marker was clicked: open the popup for its record and schedule
    /// both chart draws (percentile first). The DOM is populated by the
    /// `MarkerPopup` component reacting to `selected_site`; the draws run
    /// after layout settles, guarded by site id.
    pub fn show_popup(&mut self, record: SiteRecord) {
        let geometry = self.popup.write().open(js_bridge::viewport_size());
        self.popup_geometry.set(Some(geometry));
        self.popup_height_locked.set(false);

        let has_percentile = record.percentile_bands().is_some();
        let has_series = self
            .config
            .read()
            .as_ref()
            .map(|c| c.series_for(&record.site_no).is_some())
            .unwrap_or(false);
        self.chart_queue
            .write()
            .schedule_popup_charts(&record.site_no, has_percentile, has_series);
        self.selected_site.set(Some(record));
    }

    pub fn close_popup(&mut self) {
        self.popup.write().close();
        self.selected_site.set(None);
        self.popup_geometry.set(None);
        PlotlyCharts.clear(PERCENTILE_REGION);
        PlotlyCharts.clear(TIME_SERIES_REGION);
    }

    /// Drain due chart tasks for the open popup and draw them, in order.
    pub fn drain_chart_queue(&mut self) {
        let open_site = self.selected_site.read().as_ref().map(|r| r.site_no.clone());
        let due = self.chart_queue.write().drain(open_site.as_deref());
        for task in due {
            match task.kind {
                ChartKind::Percentile => self.draw_percentile_chart(),
                ChartKind::TimeSeries => self.draw_time_series_chart(),
            }
        }
    }

    /// Redraw both charts at the popup's settled size (after a resize).
    pub fn rerender_popup_charts(&mut self) {
        if !self.popup.read().is_open() {
            return;
        }
        self.draw_percentile_chart();
        self.draw_time_series_chart();
    }

    /// Cheap relayout of both chart regions, used live during resize.
    pub fn reflow_popup_charts(&mut self) {
        PlotlyCharts.reflow(PERCENTILE_REGION);
        PlotlyCharts.reflow(TIME_SERIES_REGION);
    }

    pub fn begin_popup_drag(&mut self, pointer: Point) {
        let Some(geometry) = *self.popup_geometry.read() else {
            log::debug!("popup geometry missing, ignoring drag start");
            return;
        };
        let origin = Point::new(geometry.left, geometry.top);
        self.popup.write().begin_drag(pointer, origin);
    }

    pub fn popup_drag_move(&mut self, pointer: Point) {
        let moved = self
            .popup
            .write()
            .drag_to(pointer, js_bridge::viewport_size());
        if let Some(geometry) = moved {
            self.popup_geometry.set(Some(geometry));
        }
    }

    pub fn begin_popup_resize(&mut self, handle: ResizeHandle, pointer: Point) {
        let Some(geometry) = *self.popup_geometry.read() else {
            log::debug!("popup geometry missing, ignoring resize start");
            return;
        };
        let size = Size::new(geometry.width, geometry.height);
        if self.popup.write().begin_resize(handle, pointer, size) {
            self.popup_height_locked.set(true);
        }
    }

    pub fn popup_resize_move(&mut self, pointer: Point) {
        let resized = self.popup.write().resize_to(pointer);
        if let Some(geometry) = resized {
            self.popup_geometry.set(Some(geometry));
            self.reflow_popup_charts();
        }
    }

    /// Route a pointer move to whichever interaction is active.
    pub fn popup_pointer_move(&mut self, pointer: Point) {
        let mode = self.popup.read().mode();
        match mode {
            cgw_core::InteractionMode::Dragging { .. } => self.popup_drag_move(pointer),
            cgw_core::InteractionMode::Resizing { .. } => self.popup_resize_move(pointer),
            cgw_core::InteractionMode::Idle => {}
        }
    }

    /// Pointer released: leave whichever interaction was active. A resize
    /// end triggers the one expensive chart re-render.
    pub fn end_popup_interaction(&mut self) {
        let mut popup = self.popup.write();
        popup.end_drag();
        let rerender = popup.end_resize();
        drop(popup);
        if rerender {
            self.rerender_popup_charts();
        }
    }

    fn chart_width(&self, region: &str) -> f64 {
        js_bridge::region_width(region).unwrap_or_else(|| {
            let width = (*self.popup_geometry.read())
                .map(|g| g.width)
                .unwrap_or(DEFAULT_WIDTH);
            width - POPUP_BODY_PADDING
        })
    }

    fn draw_percentile_chart(&mut self) {
        let record = self.selected_site.read().clone();
        let Some(record) = record else { return };
        let width = self.chart_width(PERCENTILE_REGION);
        if let Some(spec) = charts::percentile_spec(&record, width) {
            PlotlyCharts.draw(PERCENTILE_REGION, &spec);
        }
    }

    fn draw_time_series_chart(&mut self) {
        let record = self.selected_site.read().clone();
        let Some(record) = record else { return };
        let series = self
            .config
            .read()
            .as_ref()
            .and_then(|c| c.series_for(&record.site_no).cloned());
        let Some(series) = series else { return };
        let width = self.chart_width(TIME_SERIES_REGION);
        let color = record.class_display_color();
        if let Some(spec) = charts::time_series_spec(&series, color, width) {
            PlotlyCharts.draw(TIME_SERIES_REGION, &spec);
        }
    }
}

impl Default for MapSession {
    fn default() -> Self {
        Self::new()
    }
}
