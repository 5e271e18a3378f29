// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::Request;
use sabu_kecamatan::config::Config;
use sabu_kecamatan::routes::create_router;
use sabu_kecamatan::services::DistrictService;
use sabu_kecamatan::AppState;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The six Sabu Raijua kecamatan.
#[allow(dead_code)]
pub const KNOWN_NAMES: [&str; 6] = [
    "Sabu Barat",
    "Sabu Tengah",
    "Sabu Timur",
    "Sabu Liae",
    "Hawu Mehara",
    "Raijua",
];

/// Create a test app serving the bundled boundary file.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_source(Config::default().geojson_path)
}

/// Create a test app reading boundaries from `path`.
#[allow(dead_code)]
pub fn create_test_app_with_source(path: impl Into<PathBuf>) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        geojson_path: path.into(),
        ..Config::default()
    };
    let district_service = DistrictService::from_config(&config);

    let state = Arc::new(AppState {
        config,
        district_service,
    });

    (create_router(state.clone()), state)
}

/// Write `contents` to a fresh file under the system temp dir.
#[allow(dead_code)]
pub fn temp_geojson(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sabu-kecamatan-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write temp geojson");
    path
}

/// A path that does not exist.
#[allow(dead_code)]
pub fn missing_geojson() -> PathBuf {
    Path::new("data").join("does-not-exist.geojson")
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
