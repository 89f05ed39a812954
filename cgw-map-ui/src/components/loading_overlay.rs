//! Full-page overlay shown until the configuration has loaded.

use crate::state::MapSession;
use dioxus::prelude::*;

#[component]
pub fn LoadingOverlay() -> Element {
    let session = use_context::<MapSession>();
    if !*session.loading.read() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 1100; background: rgba(255,255,255,0.8); \
                display: flex; align-items: center; justify-content: center;",
            div {
                style: "color: #616161; font-size: 14px;",
                "Loading map data..."
            }
        }
    }
}
