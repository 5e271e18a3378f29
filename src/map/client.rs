// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client the map uses to fetch enriched districts.

use crate::models::EnrichedDistrict;
use crate::routes::geojson::KecamatanListResponse;
use serde::Deserialize;

/// Envelope fields shared by every API response.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: Option<bool>,
    #[serde(default)]
    error: String,
    #[serde(default)]
    details: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {error} ({details})")]
    Api {
        status: u16,
        error: String,
        details: String,
    },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the kecamatan list from the API server.
#[derive(Clone)]
pub struct DistrictClient {
    http: reqwest::Client,
    base_url: String,
}

impl DistrictClient {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET /api/geojson/kecamatan and return the districts in source order.
    pub async fn fetch_districts(&self) -> Result<Vec<EnrichedDistrict>, ClientError> {
        let url = format!("{}/api/geojson/kecamatan", self.base_url);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        let envelope: Option<Envelope> = serde_json::from_slice(&body).ok();

        let api_failed = envelope.as_ref().and_then(|e| e.success) == Some(false);
        if !status.is_success() || api_failed {
            // Non-JSON error pages still produce a usable message
            let (error, details) = match envelope {
                Some(e) => (e.error, e.details),
                None => (String::from_utf8_lossy(&body).into_owned(), String::new()),
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                error,
                details,
            });
        }

        let list: KecamatanListResponse = serde_json::from_slice(&body)?;
        tracing::debug!(count = list.count, "Fetched kecamatan list");
        Ok(list.data)
    }
}
