//! Points and target parsing.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::error::LinkError;

/// Default target used when none is given: Gangnam station, Seoul.
pub const DEFAULT_TARGET: &str = "127.027268062,37.499212063";

/// Geographic point (lon/lat) as it appears in reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl From<Coord<f64>> for GeoPoint {
    fn from(c: Coord<f64>) -> Self {
        Self { lon: c.x, lat: c.y }
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        Coord { x: p.lon, y: p.lat }
    }
}

/// Parse a target string "lon,lat" into a coordinate (x = lon, y = lat)
pub fn parse_target(s: &str) -> Result<Coord<f64>, LinkError> {
    let invalid = || LinkError::InvalidTarget(s.to_string());

    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(invalid());
    }

    let lon: f64 = parts[0].parse().map_err(|_| invalid())?;
    let lat: f64 = parts[1].parse().map_err(|_| invalid())?;
    if !lon.is_finite() || !lat.is_finite() {
        return Err(invalid());
    }

    Ok(Coord { x: lon, y: lat })
}
