// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static GeoJSON sources for kecamatan boundaries.

use crate::models::RawFeature;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A source of kecamatan features, read in full on every call.
pub trait GeoRepository: Send + Sync {
    fn load_features(&self) -> Result<Vec<RawFeature>, SourceError>;
}

/// Reads the FeatureCollection from a file on disk.
#[derive(Debug, Clone)]
pub struct FileGeoRepository {
    path: PathBuf,
}

impl FileGeoRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GeoRepository for FileGeoRepository {
    fn load_features(&self) -> Result<Vec<RawFeature>, SourceError> {
        let json_data = fs::read_to_string(&self.path).map_err(|e| {
            SourceError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        parse_feature_collection(&json_data)
    }
}

/// Serves a FeatureCollection held in memory (tests, embedded data).
#[derive(Debug, Clone, Default)]
pub struct InMemoryGeoRepository {
    json_data: String,
}

impl InMemoryGeoRepository {
    pub fn new(json_data: impl Into<String>) -> Self {
        Self {
            json_data: json_data.into(),
        }
    }
}

impl GeoRepository for InMemoryGeoRepository {
    fn load_features(&self) -> Result<Vec<RawFeature>, SourceError> {
        parse_feature_collection(&self.json_data)
    }
}

/// Parse a FeatureCollection into raw features, preserving order.
///
/// Only the envelope is validated here: the document must be JSON with a
/// `features` array. Individual features keep whatever geometry they carry,
/// and a feature that is not an object becomes an empty feature.
pub fn parse_feature_collection(json_data: &str) -> Result<Vec<RawFeature>, SourceError> {
    let document: Value =
        serde_json::from_str(json_data).map_err(|e| SourceError::Malformed(e.to_string()))?;

    if let Some(kind) = document.get("type").and_then(Value::as_str) {
        if kind != "FeatureCollection" {
            return Err(SourceError::Malformed(format!(
                "expected FeatureCollection, found {kind}"
            )));
        }
    }

    let features = document
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::Malformed("missing `features` array".to_string()))?;

    Ok(features.iter().map(raw_feature).collect())
}

fn raw_feature(feature: &Value) -> RawFeature {
    RawFeature {
        properties: feature
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
        geometry: feature.get("geometry").cloned().unwrap_or(Value::Null),
    }
}

/// Fatal errors reading the boundary source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("GeoJSON source unavailable: {0}")]
    Unavailable(String),

    #[error("GeoJSON source malformed: {0}")]
    Malformed(String),
}

impl SourceError {
    /// Machine-readable kind reported to API clients.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Unavailable(_) => "SOURCE_UNAVAILABLE",
            SourceError::Malformed(_) => "SOURCE_MALFORMED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "name": "B" }, "geometry": null },
                { "type": "Feature", "properties": { "name": "A" }, "geometry": null },
                { "type": "Feature", "properties": { "name": "C" }, "geometry": null }
            ]
        }"#;

        let features = parse_feature_collection(json).unwrap();
        let names: Vec<&str> = features
            .iter()
            .map(|f| f.properties["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_feature_collection("{ not json").unwrap_err();
        assert_eq!(err.kind(), "SOURCE_MALFORMED");
    }

    #[test]
    fn test_missing_features_is_malformed() {
        let err = parse_feature_collection(r#"{ "type": "FeatureCollection" }"#).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));

        let err = parse_feature_collection(r#"{ "features": {} }"#).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let err = parse_feature_collection(r#"{ "type": "Feature", "features": [] }"#).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn test_empty_collection_is_ok() {
        let features = parse_feature_collection(r#"{ "features": [] }"#).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn test_feature_without_properties_or_geometry() {
        let features = parse_feature_collection(r#"{ "features": [ {}, 42 ] }"#).unwrap();
        assert_eq!(features.len(), 2);
        assert!(features[0].properties.is_empty());
        assert!(features[1].geometry.is_null());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let repo = FileGeoRepository::new("data/does-not-exist.geojson");
        let err = repo.load_features().unwrap_err();
        assert_eq!(err.kind(), "SOURCE_UNAVAILABLE");
    }
}
