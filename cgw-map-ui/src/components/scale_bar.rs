//! Scale bar, bottom-left of the map.
//!
//! Width and label come from the current scale rung; the session updates
//! the rung on every zoom command and external relayout.

use crate::state::MapSession;
use dioxus::prelude::*;

#[component]
pub fn ScaleBar() -> Element {
    let session = use_context::<MapSession>();
    let Some(rung) = *session.scale.read() else {
        return rsx! {};
    };
    let width = format!("{:.0}px", rung.px);

    rsx! {
        div {
            style: "position: fixed; bottom: 18px; left: 16px; z-index: 900; \
                background: rgba(255,255,255,0.85); padding: 4px 8px; border-radius: 3px; \
                font-size: 11px; color: #424242;",
            div {
                style: "height: 4px; width: {width}; border: 1px solid #424242; \
                    border-top: none; margin-bottom: 2px;",
            }
            "{rung.label}"
        }
    }
}
