//! Info panel describing the map's region, period and data sources.

use crate::state::MapSession;
use dioxus::prelude::*;

#[component]
pub fn InfoModal() -> Element {
    let mut session = use_context::<MapSession>();
    if !*session.show_info.read() {
        return rsx! {};
    }
    let (region, period) = session
        .config
        .read()
        .as_ref()
        .map(|c| (c.region_name.clone(), c.data_period.clone()))
        .unwrap_or_default();

    rsx! {
        div {
            style: "position: fixed; top: 70px; right: 60px; z-index: 950; background: white; \
                border: 1px solid #E0E0E0; border-radius: 6px; padding: 14px 16px; width: 260px; \
                box-shadow: 0 2px 8px rgba(0,0,0,0.2); font-size: 12px; color: #424242;",
            button {
                style: "position: absolute; top: 6px; right: 8px; border: none; background: none; \
                    font-size: 16px; cursor: pointer; color: #9E9E9E;",
                onclick: move |_| session.show_info.set(false),
                "×"
            }
            h4 {
                style: "margin: 0 0 8px 0; font-size: 13px;",
                "Groundwater Monitoring Map"
            }
            if !region.is_empty() {
                p { style: "margin: 2px 0;", strong { "Region: " } "{region}" }
            }
            if !period.is_empty() {
                p { style: "margin: 2px 0;", strong { "Period: " } "{period}" }
            }
            p { style: "margin: 10px 0 2px 0;", strong { "Data sources:" } }
            p {
                style: "margin: 2px 0; font-size: 11px;",
                span { style: "color: #4CAF50;", "● " }
                "CA DWR - California state data"
            }
            p {
                style: "margin: 2px 0; font-size: 11px;",
                span { style: "color: #1976D2;", "● " }
                "USGS - federal monitoring network"
            }
            p {
                style: "margin-top: 10px; color: #9E9E9E; font-size: 11px;",
                "Click markers for details."
            }
        }
    }
}
