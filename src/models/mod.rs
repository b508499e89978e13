//! Core data models for link snapping.

pub mod link;
pub mod point;
pub mod report;

pub use link::{Link, LinkCollection, DEFAULT_LINKS_FILE};
pub use point::{parse_target, GeoPoint, DEFAULT_TARGET};
pub use report::{NearestReport, OutputFormat};
