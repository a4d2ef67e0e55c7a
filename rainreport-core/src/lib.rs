//! Core library for the `rainreport` client.
//!
//! This crate defines:
//! - Location acquisition behind a pluggable capability
//! - Fetching a rain report from the `isitraining/` endpoint
//! - Formatting report fields and writing them to a view surface
//! - The report cycle tying these together, with fixed user-facing errors
//!
//! It is used by `rainreport-cli`, but any front end that implements
//! [`ViewSurface`] can drive a cycle.

pub mod config;
pub mod cycle;
pub mod error;
pub mod fetch;
pub mod format;
pub mod geo;
pub mod model;
pub mod present;
pub mod render;
pub mod view;

pub use config::{Config, LocationConfig};
pub use cycle::{CycleState, ReportCycle};
pub use error::{CycleError, ErrorKind, FetchError, GeoError, PositionError};
pub use fetch::{ReportFetcher, ReportSource};
pub use geo::{DeniedPosition, FixedPosition, Geolocation};
pub use model::{Coordinates, PrecipitationKind, RainReport};
pub use render::DisplayModel;
pub use view::{MemoryView, Slot, ViewSurface};
