// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Turns raw GeoJSON features into enriched kecamatan records.

use crate::models::{EnrichedDistrict, RawFeature};
use crate::services::geometry;
use crate::services::stats::DistrictStatsProvider;
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

const NAME_KEYS: &[&str] = &["nama_kec", "name", "nama", "NAMOBJ", "WADMKC", "kecamatan"];
const CODE_KEYS: &[&str] = &["kode_kec", "code", "kode", "KDCPUM", "kode_kemendagri"];
const REGENCY_KEYS: &[&str] = &["kode_kab", "regency_code", "regencyCode", "KDPKAB"];
const PROVINCE_KEYS: &[&str] = &["kode_prov", "province_code", "provinceCode", "KDPPUM"];
const DESA_KEYS: &[&str] = &["jml_desa", "jumlah_desa", "desa"];
const KELURAHAN_KEYS: &[&str] = &["jml_kel", "jumlah_kelurahan", "kelurahan"];
const CAPITAL_KEYS: &[&str] = &["ibukota", "capital"];
const ISLAND_KEYS: &[&str] = &["pulau", "island"];
const DESCRIPTION_KEYS: &[&str] = &["description", "deskripsi"];

const DEFAULT_NAME: &str = "Tanpa Nama";
const DEFAULT_REGENCY_CODE: &str = "53.20";
const DEFAULT_PROVINCE_CODE: &str = "53";

/// Builds one [`EnrichedDistrict`] per feature.
///
/// All records built by the same builder share one timestamp.
pub struct DistrictFeatureBuilder<'a> {
    stats: &'a dyn DistrictStatsProvider,
    timestamp: String,
}

impl<'a> DistrictFeatureBuilder<'a> {
    pub fn new(stats: &'a dyn DistrictStatsProvider, now: DateTime<Utc>) -> Self {
        Self {
            stats,
            timestamp: format_utc_rfc3339(now),
        }
    }

    /// Enrich a single feature. Missing properties and unusable geometry are
    /// replaced by defaults; this never fails.
    pub fn build(&self, feature: &RawFeature) -> EnrichedDistrict {
        let props = &feature.properties;

        let name = prop_str(props, NAME_KEYS).unwrap_or_else(|| DEFAULT_NAME.to_string());
        let slug = slugify(&name);
        let kode = prop_str(props, CODE_KEYS).unwrap_or_default();
        let code = numeric_code(&kode);

        let coordinates = geometry::reduce(&feature.geometry).unwrap_or_else(|e| {
            tracing::warn!(district = %name, error = %e, "Unusable geometry, using zero bounds");
            Default::default()
        });

        let stats = self.stats.stats_for(&name);
        if !stats.known {
            tracing::info!(
                district = %name,
                area = stats.area,
                population = stats.population,
                "Unknown kecamatan name, using default statistics"
            );
        }

        let jumlah_desa = prop_u32(props, DESA_KEYS).unwrap_or(0);
        let jumlah_kelurahan = prop_u32(props, KELURAHAN_KEYS).unwrap_or(0);
        let capital = prop_str(props, CAPITAL_KEYS).unwrap_or_else(|| name.clone());
        let pulau = prop_str(props, ISLAND_KEYS).unwrap_or_else(|| stats.island.clone());
        let description = prop_str(props, DESCRIPTION_KEYS)
            .unwrap_or_else(|| describe(&name, &capital, &pulau));

        let id = if code > 0 {
            format!("kecamatan-{code}")
        } else {
            format!("kecamatan-{slug}")
        };

        EnrichedDistrict {
            id,
            nama_lengkap: format!("Kecamatan {name}"),
            slug,
            code,
            regency_code: prop_str(props, REGENCY_KEYS)
                .unwrap_or_else(|| DEFAULT_REGENCY_CODE.to_string()),
            province_code: prop_str(props, PROVINCE_KEYS)
                .unwrap_or_else(|| DEFAULT_PROVINCE_CODE.to_string()),
            kode_kemendagri: kode,
            jumlah_kelurahan,
            jumlah_desa,
            ibukota: capital.clone(),
            pulau,
            description,
            area: stats.area,
            population: stats.population,
            villages: jumlah_desa + jumlah_kelurahan,
            capital,
            coordinates,
            geometry: feature.geometry.clone(),
            polygon: feature.geometry.clone(),
            demographics: stats.demographics,
            economy: stats.economy,
            agriculture: stats.agriculture,
            natural_resources: stats.natural_resources,
            infrastructure: stats.infrastructure,
            tourism: stats.tourism,
            is_active: true,
            created_at: self.timestamp.clone(),
            updated_at: self.timestamp.clone(),
            name,
        }
    }
}

/// Lowercase ASCII slug: runs of anything that is not `[a-z0-9]` become a
/// single `-`, with no leading or trailing `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// "53.20.01" -> 532001. Zero when the code has no digits.
fn numeric_code(kode: &str) -> u64 {
    let digits: String = kode.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

fn describe(name: &str, capital: &str, island: &str) -> String {
    format!(
        "Kecamatan {name} merupakan salah satu kecamatan di Kabupaten Sabu Raijua, \
         Provinsi Nusa Tenggara Timur, terletak di {island} dengan ibukota di {capital}."
    )
}

/// First non-empty string (or number, stringified) among `keys`.
fn prop_str(props: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match props.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// First non-negative integer (or numeric string) among `keys`.
fn prop_u32(props: &Map<String, Value>, keys: &[&str]) -> Option<u32> {
    keys.iter().find_map(|key| match props.get(*key)? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
