// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public kecamatan GeoJSON routes.

use crate::error::{AppError, Result};
use crate::models::{EnrichedDistrict, KecamatanMetadata};
use crate::services::{DistrictService, SourceError};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Value of `source` in list responses.
pub const SOURCE_GEOJSON_FILE: &str = "geojson_file";

/// Kecamatan routes (no auth required).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/geojson/kecamatan", get(list_kecamatan))
        .route("/api/geojson/kecamatan/{slug}", get(get_kecamatan))
}

/// Enriched kecamatan list.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct KecamatanListResponse {
    pub success: bool,
    pub data: Vec<EnrichedDistrict>,
    pub count: u32,
    pub source: String,
    pub metadata: KecamatanMetadata,
}

/// Single enriched kecamatan.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct KecamatanResponse {
    pub success: bool,
    pub data: EnrichedDistrict,
}

/// Run a service call off the async runtime; enrichment does blocking file I/O.
async fn run_blocking<T, F>(state: &Arc<AppState>, call: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&DistrictService) -> std::result::Result<T, SourceError> + Send + 'static,
{
    let service = state.district_service.clone();
    let value = tokio::task::spawn_blocking(move || call(&service))
        .await
        .map_err(|e| anyhow::anyhow!("Enrichment task failed: {e}"))??;
    Ok(value)
}

/// List all kecamatan with derived statistics.
async fn list_kecamatan(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let collection = run_blocking(&state, DistrictService::list_districts).await?;
    tracing::debug!(
        count = collection.districts.len(),
        "Serving kecamatan list"
    );

    let body = KecamatanListResponse {
        success: true,
        count: collection.districts.len() as u32,
        data: collection.districts,
        source: SOURCE_GEOJSON_FILE.to_string(),
        metadata: collection.metadata,
    };

    Ok((
        [(header::CACHE_CONTROL, state.config.cache_control())],
        Json(body),
    ))
}

/// Get one kecamatan by slug.
async fn get_kecamatan(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let lookup = slug.clone();
    let district = run_blocking(&state, move |service| service.find_by_slug(&lookup))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Kecamatan '{slug}' not found")))?;

    Ok((
        [(header::CACHE_CONTROL, state.config.cache_control())],
        Json(KecamatanResponse {
            success: true,
            data: district,
        }),
    ))
}
