//! Link features read from a GeoJSON FeatureCollection.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use geo::{Coord, LineString};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::LinkError;

/// Default links file, looked up in the working directory
pub const DEFAULT_LINKS_FILE: &str = "links.geojson";

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    geo_type: String,
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(rename = "type")]
    geo_type: String,
    #[serde(default)]
    properties: RawProperties,
    geometry: RawGeometry,
}

/// Only the identifier is read; anything else in the bag is ignored.
#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    geo_type: String,
    coordinates: serde_json::Value,
}

/// A single road link
#[derive(Debug, Clone)]
pub struct Link {
    pub id: Option<String>,
    pub geometry: LineString<f64>,
}

/// All links of one input file, in file order.
///
/// Ids and geometries are kept in parallel vectors so the scanner can borrow
/// the polylines as a plain slice.
#[derive(Debug, Clone, Default)]
pub struct LinkCollection {
    ids: Vec<Option<String>>,
    polylines: Vec<LineString<f64>>,
}

impl LinkCollection {
    pub fn new(links: Vec<Link>) -> Self {
        let (ids, polylines) = links.into_iter().map(|l| (l.id, l.geometry)).unzip();
        Self { ids, polylines }
    }

    /// Parse and validate a GeoJSON document
    pub fn from_geojson_str(s: &str) -> Result<Self, LinkError> {
        let raw: RawCollection = serde_json::from_str(s)?;

        if raw.geo_type != "FeatureCollection" {
            return Err(LinkError::NotFeatureCollection(raw.geo_type));
        }

        let links = raw
            .features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| Link::from_raw(index, feature))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(links))
    }

    /// Read a GeoJSON file from disk
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading links from {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read links file {}", path.display()))?;
        let collection = Self::from_geojson_str(&content)
            .with_context(|| format!("Failed to parse links file {}", path.display()))?;

        info!(
            "Loaded {} links ({} segments)",
            collection.len(),
            collection.segment_count()
        );
        Ok(collection)
    }

    /// Geometries in input order, as the scanner consumes them
    pub fn polylines(&self) -> &[LineString<f64>] {
        &self.polylines
    }

    /// Identifier of the link at `index`, if it has one
    pub fn id(&self, index: usize) -> Option<&str> {
        self.ids.get(index)?.as_deref()
    }

    pub fn len(&self) -> usize {
        self.polylines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.polylines.iter().map(|p| p.lines().len()).sum()
    }
}

impl Link {
    fn from_raw(index: usize, feature: RawFeature) -> Result<Self, LinkError> {
        if feature.geo_type != "Feature" {
            return Err(LinkError::NotFeature {
                index,
                found: feature.geo_type,
            });
        }

        let geometry = feature.geometry;
        if geometry.geo_type != "LineString" {
            return Err(LinkError::UnsupportedGeometry {
                index,
                found: geometry.geo_type,
            });
        }

        let positions: Vec<Vec<f64>> = serde_json::from_value(geometry.coordinates)?;
        if positions.len() < 2 {
            return Err(LinkError::TooFewPositions {
                index,
                len: positions.len(),
            });
        }

        // Altitude and other extra ordinates are dropped
        let coords = positions
            .iter()
            .enumerate()
            .map(|(position, pos)| match pos.as_slice() {
                [lon, lat, ..] => Ok(Coord { x: *lon, y: *lat }),
                _ => Err(LinkError::ShortPosition {
                    index,
                    position,
                    len: pos.len(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Link {} ({:?}): {} positions",
            index,
            feature.properties.id,
            coords.len()
        );

        Ok(Self {
            id: feature.properties.id,
            geometry: LineString::new(coords),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "id": "1000001", "road_name": "Teheran-ro" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[127.0, 37.5], [127.1, 37.5], [127.1, 37.6]]
                }
            },
            {
                "type": "Feature",
                "properties": { "id": "1000002" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[127.2, 37.5, 12.0], [127.3, 37.5, 14.0]]
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let links = LinkCollection::from_geojson_str(SAMPLE).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links.segment_count(), 3);
        assert_eq!(links.id(0), Some("1000001"));
        assert_eq!(links.id(1), Some("1000002"));
        assert_eq!(links.id(2), None);

        let second = &links.polylines()[1];
        assert_eq!(second.0[0], Coord { x: 127.2, y: 37.5 });
        assert_eq!(second.0[1], Coord { x: 127.3, y: 37.5 });
    }

    #[test]
    fn test_missing_properties_is_allowed() {
        let doc = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}}
        ]}"#;
        let links = LinkCollection::from_geojson_str(doc).unwrap();
        assert_eq!(links.len(), 1);
        assert!(links.id(0).is_none());
    }

    #[test]
    fn test_new_keeps_ids_aligned_with_polylines() {
        let links = LinkCollection::new(vec![
            Link {
                id: None,
                geometry: LineString::from(vec![(0.0, 0.0), (1.0, 0.0)]),
            },
            Link {
                id: Some("b".to_string()),
                geometry: LineString::from(vec![(5.0, 5.0), (6.0, 5.0), (6.0, 6.0)]),
            },
        ]);

        assert_eq!(links.len(), 2);
        assert_eq!(links.polylines().len(), 2);
        assert_eq!(links.id(0), None);
        assert_eq!(links.id(1), Some("b"));
        assert_eq!(links.polylines()[1].0.len(), 3);
        assert_eq!(links.segment_count(), 3);
    }

    #[test]
    fn test_empty_collection() {
        let links =
            LinkCollection::from_geojson_str(r#"{"type":"FeatureCollection","features":[]}"#)
                .unwrap();
        assert!(links.is_empty());
        assert_eq!(links.segment_count(), 0);
    }

    #[test]
    fn test_rejects_wrong_collection_type() {
        let err = LinkCollection::from_geojson_str(r#"{"type":"Feature","features":[]}"#)
            .unwrap_err();
        assert!(matches!(err, LinkError::NotFeatureCollection(t) if t == "Feature"));
    }

    #[test]
    fn test_rejects_polygon_geometry() {
        let doc = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"id":"a"},
             "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}
        ]}"#;
        let err = LinkCollection::from_geojson_str(doc).unwrap_err();
        assert!(matches!(err, LinkError::UnsupportedGeometry { index: 0, .. }));
    }

    #[test]
    fn test_rejects_short_position() {
        let doc = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"id":"a"},
             "geometry":{"type":"LineString","coordinates":[[0,0],[1]]}}
        ]}"#;
        let err = LinkCollection::from_geojson_str(doc).unwrap_err();
        assert!(matches!(
            err,
            LinkError::ShortPosition {
                index: 0,
                position: 1,
                len: 1
            }
        ));
    }

    #[test]
    fn test_rejects_single_position_linestring() {
        let doc = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"id":"a"},
             "geometry":{"type":"LineString","coordinates":[[0,0]]}}
        ]}"#;
        let err = LinkCollection::from_geojson_str(doc).unwrap_err();
        assert!(matches!(err, LinkError::TooFewPositions { index: 0, len: 1 }));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = LinkCollection::from_geojson_str("{not json").unwrap_err();
        assert!(matches!(err, LinkError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let links = LinkCollection::load_from_file(file.path()).unwrap();
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LinkCollection::load_from_file(dir.path().join("missing.geojson")).unwrap_err();
        assert!(err.to_string().contains("Failed to read links file"));
    }
}
