//! Groundwater Monitoring Map
//!
//! Interactive overlay for a pre-rendered Plotly map of groundwater
//! monitoring wells. The page-assembly step renders the map figure into
//! the `gw-map` div and embeds the startup configuration; this app mounts
//! alongside it and owns everything interactive:
//! - zoom/home controls and scale bar (viewport state)
//! - layer visibility toggles
//! - the site detail popup with percentile and time-series charts
//!
//! Data flow:
//! 1. `config.json` (home viewport, per-site time series, layer list) is
//!    embedded into the WASM binary via `include_str!`.
//! 2. On mount the config is parsed and the home viewport seeded.
//! 3. Marker clicks deliver the site record as customdata; the popup and
//!    its charts render from that record plus the configured time series.

use cgw_data::{MapConfig, SiteRecord};
use cgw_map_ui::components::{
    ErrorDisplay, InfoModal, LayerPanel, LoadingOverlay, MapControls, MarkerPopup, ScaleBar,
};
use cgw_map_ui::js_bridge;
use cgw_map_ui::state::MapSession;
use dioxus::prelude::*;

/// Startup configuration produced by the page-assembly step.
const CONFIG_JSON: &str = include_str!("../assets/config.json");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gw-app-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut session = use_context_provider(MapSession::new);

    // Parse config and wire up map events on mount.
    use_effect(move || {
        match MapConfig::from_json(CONFIG_JSON) {
            Ok(config) => {
                log::info!(
                    "loaded config: {} time series, {} layers",
                    config.time_series.len(),
                    config.layers.len()
                );
                session.apply_config(config);
            }
            Err(e) => {
                log::error!("failed to load map configuration: {}", e);
                session
                    .error_msg
                    .set(Some(format!("Failed to load map configuration: {}", e)));
                session.loading.set(false);
                return;
            }
        }

        js_bridge::bind_map_events(
            move |customdata| match SiteRecord::from_customdata(&customdata) {
                Ok(record) => session.show_popup(record),
                Err(e) => log::warn!("unreadable marker customdata: {}", e),
            },
            move |event_json| session.on_map_relayout(&event_json),
        );
        js_bridge::bind_escape_key(move |_| session.close_popup());
    });

    rsx! {
        if let Some(err) = session.error_msg.read().clone() {
            ErrorDisplay { message: err }
        }
        LoadingOverlay {}
        MapControls {}
        ScaleBar {}
        LayerPanel {}
        InfoModal {}
        MarkerPopup {}
    }
}
