// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Sabu Raijua kecamatan map backend.
//!
//! Serves the kecamatan (district) boundaries of Kabupaten Sabu Raijua
//! enriched with derived statistics, and models the interactive district
//! map that consumes them.

pub mod config;
pub mod error;
pub mod map;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::DistrictService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub district_service: DistrictService,
}
