// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Kecamatan enrichment service.

use crate::config::Config;
use crate::models::{EnrichedDistrict, KecamatanMetadata};
use crate::services::builder::DistrictFeatureBuilder;
use crate::services::repository::{FileGeoRepository, GeoRepository, SourceError};
use crate::services::stats::{DistrictStatsProvider, TableStatsProvider};
use std::sync::Arc;

const METADATA_SOURCE: &str = "Badan Informasi Geospasial / BPS Kabupaten Sabu Raijua";
const COORDINATE_SYSTEM: &str = "WGS84 (EPSG:4326)";
const KABUPATEN: &str = "Sabu Raijua";
const PROVINSI: &str = "Nusa Tenggara Timur";
const KODE_KABUPATEN: &str = "53.20";

/// Enriched districts plus provenance metadata.
#[derive(Debug, Clone)]
pub struct DistrictCollection {
    pub districts: Vec<EnrichedDistrict>,
    pub metadata: KecamatanMetadata,
}

/// Reads the boundary source and enriches every feature.
///
/// Holds no per-request state: every call re-reads the source.
#[derive(Clone)]
pub struct DistrictService {
    repository: Arc<dyn GeoRepository>,
    stats: Arc<dyn DistrictStatsProvider>,
    data_year: u16,
}

impl DistrictService {
    pub fn new(repository: Arc<dyn GeoRepository>, stats: Arc<dyn DistrictStatsProvider>) -> Self {
        Self {
            repository,
            stats,
            data_year: crate::config::DEFAULT_DATA_YEAR,
        }
    }

    /// File repository and table statistics as configured.
    pub fn from_config(config: &Config) -> Self {
        let stats = match config.stats_seed {
            Some(seed) => TableStatsProvider::seeded(seed),
            None => TableStatsProvider::unseeded(),
        };
        Self::new(
            Arc::new(FileGeoRepository::new(&config.geojson_path)),
            Arc::new(stats),
        )
        .with_data_year(config.data_year)
    }

    pub fn with_data_year(mut self, year: u16) -> Self {
        self.data_year = year;
        self
    }

    /// Enrich every feature of the source, in source order.
    ///
    /// A missing or unparseable source fails the whole call; problems with
    /// individual features are replaced by defaults.
    pub fn list_districts(&self) -> Result<DistrictCollection, SourceError> {
        let features = self.repository.load_features()?;
        let builder = DistrictFeatureBuilder::new(self.stats.as_ref(), chrono::Utc::now());

        let districts: Vec<EnrichedDistrict> = features.iter().map(|f| builder.build(f)).collect();
        tracing::debug!(count = districts.len(), "Enriched kecamatan features");

        let metadata = KecamatanMetadata {
            source: METADATA_SOURCE.to_string(),
            year: self.data_year,
            coordinate_system: COORDINATE_SYSTEM.to_string(),
            total_kecamatan: districts.len() as u32,
            kabupaten: KABUPATEN.to_string(),
            provinsi: PROVINSI.to_string(),
            kode_kabupaten: KODE_KABUPATEN.to_string(),
        };

        Ok(DistrictCollection {
            districts,
            metadata,
        })
    }

    /// Enrich the source and return the district with the given slug.
    pub fn find_by_slug(&self, slug: &str) -> Result<Option<EnrichedDistrict>, SourceError> {
        Ok(self
            .list_districts()?
            .districts
            .into_iter()
            .find(|d| d.slug == slug))
    }
}
