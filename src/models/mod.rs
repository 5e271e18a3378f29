// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod district;
pub mod stats;

pub use district::{Bounds, Coordinates, EnrichedDistrict, KecamatanMetadata, LatLng, RawFeature};
pub use stats::DistrictStats;
