// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_GEOJSON_PATH: &str = "data/kecamatan_sabu_raijua.geojson";
pub const DEFAULT_CACHE_MAX_AGE_SECS: u32 = 3600;
pub const DEFAULT_DATA_YEAR: u16 = 2023;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Kecamatan FeatureCollection, re-read on every request
    pub geojson_path: PathBuf,
    /// `max-age` of the public Cache-Control header on district responses
    pub cache_max_age_secs: u32,
    /// Seed for the placeholder statistics. `None` makes them vary per request.
    pub stats_seed: Option<u64>,
    /// Year reported in the response metadata
    pub data_year: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            geojson_path: PathBuf::from(DEFAULT_GEOJSON_PATH),
            cache_max_age_secs: DEFAULT_CACHE_MAX_AGE_SECS,
            stats_seed: Some(2023),
            data_year: DEFAULT_DATA_YEAR,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: parse_var("PORT")?.unwrap_or(8080),
            geojson_path: env::var("KECAMATAN_GEOJSON_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_GEOJSON_PATH)),
            cache_max_age_secs: parse_var("CACHE_MAX_AGE_SECS")?
                .unwrap_or(DEFAULT_CACHE_MAX_AGE_SECS),
            stats_seed: parse_var("STATS_SEED")?,
            data_year: parse_var("GEOJSON_DATA_YEAR")?.unwrap_or(DEFAULT_DATA_YEAR),
        })
    }

    /// Value of the Cache-Control header for cacheable responses.
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_max_age_secs)
    }
}

/// Read and parse an optional variable. Unset or blank is `None`.
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name, raw)),
        _ => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Single test touching the environment to avoid races between tests
        env::set_var("PORT", "9090");
        env::set_var("KECAMATAN_GEOJSON_PATH", "/srv/geo/kecamatan.geojson");
        env::set_var("STATS_SEED", "77");
        env::remove_var("CACHE_MAX_AGE_SECS");
        env::remove_var("GEOJSON_DATA_YEAR");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 9090);
        assert_eq!(
            config.geojson_path,
            PathBuf::from("/srv/geo/kecamatan.geojson")
        );
        assert_eq!(config.stats_seed, Some(77));
        assert_eq!(config.cache_max_age_secs, 3600);
        assert_eq!(config.data_year, 2023);
        assert_eq!(config.cache_control(), "public, max-age=3600");

        env::set_var("STATS_SEED", "not-a-number");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("STATS_SEED", _)));

        env::remove_var("PORT");
        env::remove_var("KECAMATAN_GEOJSON_PATH");
        env::remove_var("STATS_SEED");
    }
}
