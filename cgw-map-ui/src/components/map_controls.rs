//! Zoom / home / info button stack, top-right of the map.

use crate::state::MapSession;
use dioxus::prelude::*;

const BTN_STYLE: &str = "display: block; width: 34px; height: 34px; margin-bottom: 6px; \
    border: 1px solid #D0D0D0; border-radius: 4px; background: white; color: #424242; \
    font-size: 16px; cursor: pointer; box-shadow: 0 1px 3px rgba(0,0,0,0.15);";

#[component]
pub fn MapControls() -> Element {
    let mut session = use_context::<MapSession>();

    rsx! {
        div {
            style: "position: fixed; top: 70px; right: 16px; z-index: 900;",
            button {
                style: BTN_STYLE,
                title: "Zoom In",
                onclick: move |_| session.zoom_in(),
                "+"
            }
            button {
                style: BTN_STYLE,
                title: "Zoom Out",
                onclick: move |_| session.zoom_out(),
                "−"
            }
            button {
                style: BTN_STYLE,
                title: "Home",
                onclick: move |_| session.go_home(),
                "⌂"
            }
            button {
                style: BTN_STYLE,
                title: "Info",
                onclick: move |_| {
                    let showing = *session.show_info.read();
                    session.show_info.set(!showing);
                },
                "i"
            }
        }
    }
}
