//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 70px; left: 50%; transform: translateX(-50%); \
                z-index: 1200; padding: 12px 16px; background: #FFEBEE; color: #C62828; \
                border-radius: 4px; border: 1px solid #EF9A9A; font-size: 13px;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
