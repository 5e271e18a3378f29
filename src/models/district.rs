// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Kecamatan (district) model, as read from GeoJSON and as served to the map.

use crate::models::stats::{
    Agriculture, Demographics, Economy, Infrastructure, NaturalResources, Tourism,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One feature of the source FeatureCollection, kept as raw JSON.
///
/// Geometry is not parsed up front so a single malformed feature only loses
/// its coordinates instead of failing the whole collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFeature {
    pub properties: Map<String, Value>,
    /// `Value::Null` when the feature has no geometry
    pub geometry: Value,
}

/// A point in WGS84 degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Axis-aligned bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            north: self.north.max(other.north),
            south: self.south.min(other.south),
            east: self.east.max(other.east),
            west: self.west.min(other.west),
        }
    }

    /// True for the all-zero placeholder used when geometry is missing.
    pub fn is_empty(&self) -> bool {
        *self == Bounds::default()
    }
}

/// Label position and framing box for a kecamatan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Coordinates {
    pub center: LatLng,
    pub bounds: Bounds,
}

/// A kecamatan with identity, geometry and derived statistics.
///
/// Built fresh on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EnrichedDistrict {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Kemendagri code with the dots removed (e.g. 532001)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub code: u64,
    pub regency_code: String,
    pub province_code: String,
    /// Dotted Kemendagri code (e.g. "53.20.01")
    #[serde(rename = "kode_kemendagri")]
    pub kode_kemendagri: String,
    #[serde(rename = "nama_lengkap")]
    pub nama_lengkap: String,
    #[serde(rename = "jumlah_kelurahan")]
    pub jumlah_kelurahan: u32,
    #[serde(rename = "jumlah_desa")]
    pub jumlah_desa: u32,
    pub ibukota: String,
    pub pulau: String,
    pub description: String,
    /// km²
    pub area: f64,
    pub population: u32,
    /// Desa plus kelurahan
    pub villages: u32,
    pub capital: String,
    pub coordinates: Coordinates,
    /// Source geometry, untouched
    #[cfg_attr(feature = "binding-generation", ts(type = "unknown"))]
    pub geometry: Value,
    /// Copy of `geometry` for older consumers
    #[cfg_attr(feature = "binding-generation", ts(type = "unknown"))]
    pub polygon: Value,
    pub demographics: Demographics,
    pub economy: Economy,
    pub agriculture: Agriculture,
    pub natural_resources: NaturalResources,
    pub infrastructure: Infrastructure,
    pub tourism: Tourism,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Provenance block returned alongside the district list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct KecamatanMetadata {
    pub source: String,
    pub year: u16,
    pub coordinate_system: String,
    pub total_kecamatan: u32,
    pub kabupaten: String,
    pub provinsi: String,
    pub kode_kabupaten: String,
}
