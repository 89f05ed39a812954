//! Interactive core of the CGW groundwater map.
//!
//! Everything here is plain single-threaded state-machine and geometry
//! logic with no DOM access. The rendered map and the popup charts sit
//! behind the `surface` traits, so the controllers run identically against
//! the Plotly bridge in `cgw-map-ui` and against recording stubs in tests.

pub mod charts;
pub mod geo;
pub mod layers;
pub mod popup;
pub mod queue;
pub mod surface;
pub mod viewport;

pub use charts::ChartSpec;
pub use geo::{meters_per_pixel, pick_scale_rung, LatLon, ScaleRung, Viewport};
pub use layers::LayerController;
pub use popup::{InteractionMode, PopupController, PopupGeometry, ResizeHandle, ScreenSize};
pub use queue::{ChartKind, ChartQueue, ChartTask};
pub use surface::{ChartSurface, MapSurface, SeriesCoords};
pub use viewport::ViewportController;
