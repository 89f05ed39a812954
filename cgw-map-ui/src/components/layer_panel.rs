//! Layer toggle panel, bottom-right of the map.

use crate::state::MapSession;
use dioxus::prelude::*;

#[component]
pub fn LayerPanel() -> Element {
    let mut session = use_context::<MapSession>();
    let layers: Vec<(String, String, String, usize)> = session
        .config
        .read()
        .as_ref()
        .map(|c| {
            c.layers
                .iter()
                .map(|l| {
                    (
                        l.name.clone(),
                        l.display_label().to_string(),
                        l.color.clone(),
                        l.count,
                    )
                })
                .collect()
        })
        .unwrap_or_default();
    if layers.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "position: fixed; bottom: 18px; right: 16px; z-index: 900; background: white; \
                border: 1px solid #E0E0E0; border-radius: 6px; padding: 10px 12px; \
                box-shadow: 0 1px 4px rgba(0,0,0,0.15); font-size: 12px;",
            h4 {
                style: "margin: 0 0 6px 0; font-size: 12px; color: #1976D2;",
                "Data Layers"
            }
            for (name, label, color, count) in layers {
                div {
                    key: "{name}",
                    style: "display: flex; align-items: center; margin: 3px 0;",
                    input {
                        r#type: "checkbox",
                        id: "layer-{name}",
                        checked: !session.layers.read().is_hidden(&name),
                        oninput: {
                            let name = name.clone();
                            move |evt: FormEvent| session.toggle_layer(&name, evt.checked())
                        },
                    }
                    label {
                        r#for: "layer-{name}",
                        style: "margin-left: 6px; cursor: pointer; display: flex; align-items: center;",
                        span {
                            style: "display: inline-block; width: 10px; height: 10px; \
                                border-radius: 50%; margin-right: 5px; background: {color};",
                        }
                        "{label}"
                        span {
                            style: "margin-left: 6px; color: #9E9E9E;",
                            "{count}"
                        }
                    }
                }
            }
        }
    }
}
