// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sabu Raijua kecamatan API server
//!
//! Serves the district boundaries of Kabupaten Sabu Raijua, enriched with
//! derived statistics, to the interactive map.

use sabu_kecamatan::{config::Config, services::DistrictService, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Sabu Raijua kecamatan API");

    let district_service = DistrictService::from_config(&config);

    // The source is re-read per request; check it once so a bad path shows
    // up in the startup logs rather than on the first map load.
    tracing::info!(path = %config.geojson_path.display(), "Checking kecamatan boundaries");
    match district_service.list_districts() {
        Ok(collection) => tracing::info!(
            count = collection.districts.len(),
            seeded = config.stats_seed.is_some(),
            "Kecamatan boundaries readable"
        ),
        Err(e) => tracing::warn!(error = %e, kind = e.kind(), "Kecamatan boundaries not readable"),
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        district_service,
    });

    // Build router
    let app = sabu_kecamatan::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sabu_kecamatan=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
