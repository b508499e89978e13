//! Nearest-segment scan across all polylines.

use std::cmp::Ordering;

use geo::{Coord, Line, LineString};
use rayon::prelude::*;
use tracing::trace;

use super::distance::haversine_distance;
use super::projection::{is_degenerate, project};

/// Closest valid projection found by a scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    pub distance_m: f64,
    pub point: Coord<f64>,
    pub polyline_index: usize,
    pub segment_index: usize,
}

impl Nearest {
    /// Order by distance, then by position in the input
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.distance_m
            .total_cmp(&other.distance_m)
            .then(self.polyline_index.cmp(&other.polyline_index))
            .then(self.segment_index.cmp(&other.segment_index))
    }
}

/// Find the closest foot of perpendicular over every segment of every polyline.
///
/// Returns `None` when no projection lands within its segment, including for
/// empty input. On exact ties the first segment in input order wins.
pub fn find_nearest(polylines: &[LineString<f64>], target: Coord<f64>) -> Option<Nearest> {
    polylines
        .iter()
        .enumerate()
        .flat_map(|(polyline_index, line)| {
            line.lines()
                .enumerate()
                .map(move |(segment_index, segment)| (polyline_index, segment_index, segment))
        })
        .filter_map(|(pi, si, segment)| candidate(pi, si, segment, target))
        .fold(None, keep_closer)
}

/// Parallel version of [`find_nearest`] with identical results.
///
/// Polylines are scanned independently and reduced by distance and input
/// position, so thread scheduling never decides a tie.
pub fn find_nearest_par(polylines: &[LineString<f64>], target: Coord<f64>) -> Option<Nearest> {
    polylines
        .par_iter()
        .enumerate()
        .filter_map(|(polyline_index, line)| {
            line.lines()
                .enumerate()
                .filter_map(|(si, segment)| candidate(polyline_index, si, segment, target))
                .fold(None, keep_closer)
        })
        .reduce_with(|a, b| match a.cmp_key(&b) {
            Ordering::Greater => b,
            _ => a,
        })
}

fn candidate(
    polyline_index: usize,
    segment_index: usize,
    segment: Line<f64>,
    target: Coord<f64>,
) -> Option<Nearest> {
    if is_degenerate(segment) {
        trace!(
            "Skipping zero-length segment {} of polyline {}",
            segment_index,
            polyline_index
        );
        return None;
    }

    let projection = project(segment, target);
    if !projection.within_span {
        return None;
    }

    Some(Nearest {
        distance_m: haversine_distance(target, projection.foot),
        point: projection.foot,
        polyline_index,
        segment_index,
    })
}

/// Strict less-than against the current best (or +inf), so NaN never wins
fn keep_closer(best: Option<Nearest>, next: Nearest) -> Option<Nearest> {
    let best_distance = best.map_or(f64::INFINITY, |b| b.distance_m);
    if next.distance_m < best_distance {
        Some(next)
    } else {
        best
    }
}
