//! Snapping a target point onto the nearest link.
//!
//! Projects the target onto every segment, measures the great-circle
//! distance to each valid foot and keeps the closest one.

mod distance;
mod projection;
mod scanner;

pub use distance::{haversine_distance, EARTH_RADIUS_KM};
pub use projection::{is_degenerate, project, Projection};
pub use scanner::{find_nearest, find_nearest_par, Nearest};

use geo::Coord;
use tracing::{debug, info};

use crate::models::{LinkCollection, NearestReport};

/// Snap `target` onto `links` and describe the winning link.
///
/// Both binaries go through here; they only differ in where the links path
/// and the target come from.
pub fn locate(
    links: &LinkCollection,
    target: Coord<f64>,
    parallel: bool,
) -> Option<NearestReport> {
    debug!(
        "Scanning {} segments for target ({}, {}), parallel={}",
        links.segment_count(),
        target.x,
        target.y,
        parallel
    );

    let nearest = if parallel {
        find_nearest_par(links.polylines(), target)
    } else {
        find_nearest(links.polylines(), target)
    };

    let Some(nearest) = nearest else {
        info!("No perpendicular foot falls on any link");
        return None;
    };

    let link_id = links.id(nearest.polyline_index).map(str::to_string);

    info!(
        "Nearest link {:?} (segment {}) at {:.3} m",
        link_id, nearest.segment_index, nearest.distance_m
    );

    Some(NearestReport {
        link_id,
        polyline_index: nearest.polyline_index,
        segment_index: nearest.segment_index,
        distance_m: nearest.distance_m,
        point: nearest.point.into(),
    })
}
