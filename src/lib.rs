//! Findlink - snap a point onto the nearest road link
//!
//! This library provides the shared models and snapping core for the
//! findlink and preset binaries.

pub mod error;
pub mod models;
pub mod snap;

pub use error::LinkError;
pub use models::{GeoPoint, Link, LinkCollection, NearestReport, OutputFormat};
pub use snap::{find_nearest, find_nearest_par, locate, Nearest};
