//! Foot-of-perpendicular projection onto a segment.
//!
//! Lon/lat are treated as planar coordinates here. That only holds for
//! segments that are short next to the Earth's radius, which road links are.

use geo::{Coord, Line, Rect};

/// Outcome of projecting a target onto a segment's supporting line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Foot lies inside the endpoints' bounding box (inclusive)
    pub within_span: bool,
    pub foot: Coord<f64>,
}

/// Project `target` onto the infinite line through `segment`.
///
/// The parameter is not clamped; validity is decided afterwards by the
/// bounding-box test, which stays correct on the non-degenerate axis of
/// horizontal or vertical segments. A zero-length segment divides by zero
/// and yields a NaN foot that is never within span.
pub fn project(segment: Line<f64>, target: Coord<f64>) -> Projection {
    let d = segment.delta();
    let v = target - segment.start;
    let t = (v.x * d.x + v.y * d.y) / (d.x * d.x + d.y * d.y);
    let foot = segment.start + d * t;

    Projection {
        within_span: within_bounds(segment, foot),
        foot,
    }
}

fn within_bounds(segment: Line<f64>, p: Coord<f64>) -> bool {
    let bounds = Rect::new(segment.start, segment.end);
    let (min, max) = (bounds.min(), bounds.max());
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}

/// Segment with coincident endpoints
pub fn is_degenerate(segment: Line<f64>) -> bool {
    segment.start == segment.end
}
