//! Shared data model for the CGW groundwater map apps.
//!
//! This crate owns everything the map and popup layers read but never
//! mutate: monitoring-site records (delivered as Plotly marker customdata),
//! per-site time series, the percentile classification shared by marker
//! styling and popup charts, and the startup configuration produced by the
//! page-assembly step.

pub mod config;
pub mod percentile;
pub mod site;
pub mod timeseries;

pub use config::{LayerInfo, MapConfig};
pub use percentile::PercentileBands;
pub use site::{SiteRecord, SiteSource};
pub use timeseries::{TimeSeries, TimeSeriesStats};
