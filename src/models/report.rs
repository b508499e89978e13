//! Result document handed to the binaries for display.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// How a result is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// "<distance_m> <lon> <lat>"
    #[default]
    Text,
    /// Serialized report, `null` when nothing was found
    Json,
}

/// Closest point on the closest link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_id: Option<String>,
    pub polyline_index: usize,
    pub segment_index: usize,
    pub distance_m: f64,
    pub point: GeoPoint,
}

impl fmt::Display for NearestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.distance_m, self.point.lon, self.point.lat)
    }
}

impl OutputFormat {
    /// Render an optional report; `None` never prints as a distance
    pub fn render(self, report: Option<&NearestReport>) -> anyhow::Result<String> {
        Ok(match (self, report) {
            (OutputFormat::Text, Some(r)) => r.to_string(),
            (OutputFormat::Text, None) => "no result".to_string(),
            (OutputFormat::Json, r) => serde_json::to_string_pretty(&r)?,
        })
    }
}
