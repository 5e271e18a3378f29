// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Center and bounds of kecamatan geometries.
//!
//! The center is the midpoint of the bounding box, not an area-weighted
//! centroid. It is good enough for label placement and initial framing.

use crate::models::{Bounds, Coordinates, LatLng};
use geo::{BoundingRect, Coord, LineString, MultiPolygon, Polygon, Rect};
use serde_json::Value;

/// Outer rings shorter than this are ignored.
const MIN_RING_POINTS: usize = 3;

/// Compute center and bounds for a raw GeoJSON geometry.
///
/// MultiPolygon bounds cover the outer rings of every part.
pub fn reduce(geometry: &Value) -> Result<Coordinates, GeometryError> {
    if geometry.is_null() {
        return Err(GeometryError::Missing);
    }

    let parsed = geojson::Geometry::from_json_value(geometry.clone())
        .map_err(|e| GeometryError::Malformed(e.to_string()))?;

    let rect = outer_rings(parsed.value)?
        .iter()
        .filter(|ring| ring.0.len() >= MIN_RING_POINTS)
        .filter_map(|ring| ring.bounding_rect())
        .reduce(merge_rects)
        .ok_or(GeometryError::Empty)?;

    Ok(coordinates_from_rect(rect))
}

/// Convert to geo types and keep only the exterior rings.
fn outer_rings(value: geojson::Value) -> Result<Vec<LineString<f64>>, GeometryError> {
    use std::convert::TryInto;

    match value {
        geojson::Value::Polygon(_) => {
            let poly: Polygon<f64> = value
                .try_into()
                .map_err(|e: geojson::Error| GeometryError::Malformed(e.to_string()))?;
            Ok(vec![poly.exterior().clone()])
        }
        geojson::Value::MultiPolygon(_) => {
            let multi: MultiPolygon<f64> = value
                .try_into()
                .map_err(|e: geojson::Error| GeometryError::Malformed(e.to_string()))?;
            Ok(multi.0.iter().map(|p| p.exterior().clone()).collect())
        }
        other => Err(GeometryError::UnsupportedType(type_name(&other).to_string())),
    }
}

fn type_name(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
        _ => "Unknown",
    }
}

fn merge_rects(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}

fn coordinates_from_rect(rect: Rect<f64>) -> Coordinates {
    let (min, max) = (rect.min(), rect.max());
    Coordinates {
        center: LatLng {
            lat: (min.y + max.y) / 2.0,
            lng: (min.x + max.x) / 2.0,
        },
        bounds: Bounds {
            north: max.y,
            south: min.y,
            east: max.x,
            west: min.x,
        },
    }
}

/// Reasons a feature's geometry yields no usable coordinates.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("Feature has no geometry")]
    Missing,

    #[error("Malformed geometry: {0}")]
    Malformed(String),

    #[error("Unsupported geometry type {0} (expected Polygon or MultiPolygon)")]
    UnsupportedType(String),

    #[error("Geometry has no usable outer ring")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square(west: f64, south: f64, east: f64, north: f64) -> Value {
        json!({
            "type": "Polygon",
            "coordinates": [[[west, south], [east, south], [east, north], [west, north], [west, south]]]
        })
    }

    #[test]
    fn test_polygon_center_and_bounds() {
        let coords = reduce(&square(121.7, -10.6, 121.9, -10.4)).unwrap();

        assert_eq!(coords.bounds.north, -10.4);
        assert_eq!(coords.bounds.south, -10.6);
        assert_eq!(coords.bounds.east, 121.9);
        assert_eq!(coords.bounds.west, 121.7);
        assert!((coords.center.lat - -10.5).abs() < 1e-9);
        assert!((coords.center.lng - 121.8).abs() < 1e-9);
    }

    #[test]
    fn test_irregular_polygon_uses_bounding_box_midpoint() {
        let geometry = json!({
            "type": "Polygon",
            "coordinates": [[[121.78, -10.50], [121.86, -10.46], [121.88, -10.52], [121.80, -10.56], [121.78, -10.50]]]
        });
        let coords = reduce(&geometry).unwrap();

        assert!((coords.center.lat - (-10.46 + -10.56) / 2.0).abs() < 1e-9);
        assert!((coords.center.lng - (121.78 + 121.88) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_holes_do_not_affect_bounds() {
        let geometry = json!({
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
                [[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 2.0], [1.0, 1.0]]
            ]
        });
        let coords = reduce(&geometry).unwrap();
        assert_eq!(coords.center, LatLng { lat: 2.0, lng: 2.0 });
    }

    #[test]
    fn test_multipolygon_bounds_cover_all_parts() {
        let geometry = json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[121.56, -10.60], [121.64, -10.60], [121.65, -10.64], [121.58, -10.66], [121.56, -10.60]]],
                [[[121.27, -10.83], [121.30, -10.83], [121.30, -10.85], [121.27, -10.85], [121.27, -10.83]]]
            ]
        });
        let coords = reduce(&geometry).unwrap();

        assert_eq!(coords.bounds.north, -10.60);
        assert_eq!(coords.bounds.south, -10.85);
        assert_eq!(coords.bounds.east, 121.65);
        assert_eq!(coords.bounds.west, 121.27);
    }

    #[test]
    fn test_missing_geometry_defaults_to_zero() {
        assert!(matches!(reduce(&Value::Null), Err(GeometryError::Missing)));

        let coords = reduce(&Value::Null).unwrap_or_default();
        assert_eq!(coords.center, LatLng { lat: 0.0, lng: 0.0 });
        assert!(coords.bounds.is_empty());
    }

    #[test]
    fn test_malformed_geometry_defaults_to_zero() {
        let bad = json!({ "type": "Polygon", "coordinates": "not-an-array" });
        assert!(matches!(reduce(&bad), Err(GeometryError::Malformed(_))));
        assert!(reduce(&bad).unwrap_or_default().bounds.is_empty());

        let empty = json!({ "type": "Polygon", "coordinates": [[]] });
        assert!(reduce(&empty).is_err());
    }

    #[test]
    fn test_point_geometry_is_unsupported() {
        let point = json!({ "type": "Point", "coordinates": [121.8, -10.5] });
        assert!(matches!(
            reduce(&point),
            Err(GeometryError::UnsupportedType(t)) if t == "Point"
        ));
    }

    #[test]
    fn test_center_lies_within_bounds() {
        let shapes = [
            square(-1.0, -1.0, 1.0, 1.0),
            square(121.27, -10.85, 121.30, -10.83),
            square(10.0, 10.0, 10.5, 12.0),
            json!({
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [3.0, 1.0], [1.0, 5.0], [0.0, 0.0]]]
            }),
        ];

        for shape in &shapes {
            let c = reduce(shape).unwrap();
            assert!(c.bounds.north >= c.bounds.south);
            assert!(c.bounds.east >= c.bounds.west);
            assert!((c.bounds.south..=c.bounds.north).contains(&c.center.lat));
            assert!((c.bounds.west..=c.bounds.east).contains(&c.center.lng));
        }
    }
}
