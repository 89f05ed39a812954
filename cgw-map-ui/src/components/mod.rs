//! Reusable Dioxus RSX components for the CGW map app.

mod error_display;
mod info_modal;
mod layer_panel;
mod loading_overlay;
mod map_controls;
mod marker_popup;
mod scale_bar;

pub use error_display::ErrorDisplay;
pub use info_modal::InfoModal;
pub use layer_panel::LayerPanel;
pub use loading_overlay::LoadingOverlay;
pub use map_controls::MapControls;
pub use marker_popup::MarkerPopup;
pub use scale_bar::ScaleBar;
