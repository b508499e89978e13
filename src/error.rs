//! Errors raised while turning raw input into links and targets.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a FeatureCollection, found '{0}'")]
    NotFeatureCollection(String),

    #[error("feature {index}: expected type 'Feature', found '{found}'")]
    NotFeature { index: usize, found: String },

    #[error("feature {index}: expected a LineString geometry, found '{found}'")]
    UnsupportedGeometry { index: usize, found: String },

    #[error("feature {index}: position {position} has {len} ordinates, need at least 2")]
    ShortPosition {
        index: usize,
        position: usize,
        len: usize,
    },

    #[error("feature {index}: LineString has {len} positions, need at least 2")]
    TooFewPositions { index: usize, len: usize },

    #[error("invalid target '{0}': expected \"lon,lat\"")]
    InvalidTarget(String),
}
