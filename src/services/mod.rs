// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod builder;
pub mod district;
pub mod geometry;
pub mod repository;
pub mod stats;
pub mod tables;

pub use builder::{slugify, DistrictFeatureBuilder};
pub use district::{DistrictCollection, DistrictService};
pub use repository::{FileGeoRepository, GeoRepository, InMemoryGeoRepository, SourceError};
pub use stats::{DistrictStatsProvider, TableStatsProvider};
