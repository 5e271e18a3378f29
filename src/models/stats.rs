// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived statistic blocks attached to every kecamatan.
//!
//! Every figure here is computed from the lookup tables in
//! `services::tables` using fixed ratios. Fields documented as *jittered*
//! are illustrative placeholders drawn from a seeded RNG, not measured data.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Population figures for a kecamatan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Demographics {
    pub total_population: u32,
    /// Always `total_population - female_population`
    pub male_population: u32,
    pub female_population: u32,
    /// Inhabitants per km²
    pub density: f64,
    pub households: u32,
    pub age_groups: AgeGroups,
    pub education: EducationLevels,
}

/// Age-group breakdown (sums to the total population).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AgeGroups {
    /// 0-14 years
    pub children: u32,
    /// 15-64 years
    pub productive: u32,
    /// 65+ years
    pub elderly: u32,
}

/// Highest completed education level (sums to the total population).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EducationLevels {
    pub no_schooling: u32,
    pub elementary: u32,
    pub junior_high: u32,
    pub senior_high: u32,
    pub higher_education: u32,
}

/// Economic indicators. Jittered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Economy {
    /// Rupiah per year
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub gdp_per_capita: u64,
    /// Percent of population
    pub poverty_rate: f64,
    /// Percent of workforce
    pub unemployment_rate: f64,
    pub msme_count: u32,
    pub main_sectors: Vec<String>,
}

/// Farming, livestock and fishery figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Agriculture {
    /// km²
    pub agricultural_area: f64,
    /// km²
    pub rice_field_area: f64,
    pub crops: CropProduction,
    /// Jittered
    pub livestock: Livestock,
    pub fishery: Fishery,
}

/// Annual crop production in tons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CropProduction {
    pub rice: f64,
    pub corn: f64,
    pub mung_bean: f64,
    pub sorghum: f64,
}

/// Livestock head counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Livestock {
    pub cattle: u32,
    pub buffalo: u32,
    pub goats: u32,
    pub pigs: u32,
    pub horses: u32,
    pub chickens: u32,
}

/// Fishery output in tons, plus the number of registered fishers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Fishery {
    pub capture: f64,
    pub seaweed: f64,
    pub fishers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NaturalResources {
    /// km²
    pub forest_area: f64,
    pub coastline_km: f64,
    pub lontar_trees: u32,
    /// Tons per year
    pub salt_production: f64,
    pub water_sources: u32,
    pub minerals: Vec<String>,
}

/// Public infrastructure. Percentages are jittered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Infrastructure {
    pub road_length_km: f64,
    pub good_road_percentage: f64,
    pub electrification_percentage: f64,
    pub clean_water_percentage: f64,
    pub health_centers: u32,
    pub integrated_health_posts: u32,
    pub schools: Schools,
    pub places_of_worship: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Schools {
    pub elementary: u32,
    pub junior_high: u32,
    pub senior_high: u32,
}

/// Tourism figures. `annual_visitors` is jittered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Tourism {
    pub destinations: Vec<String>,
    pub cultural_sites: Vec<String>,
    pub accommodations: u32,
    pub annual_visitors: u32,
}

/// Everything a stats provider knows about one kecamatan name.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictStats {
    /// False when the name fell back to default figures
    pub known: bool,
    /// km²
    pub area: f64,
    pub population: u32,
    pub island: String,
    pub demographics: Demographics,
    pub economy: Economy,
    pub agriculture: Agriculture,
    pub natural_resources: NaturalResources,
    pub infrastructure: Infrastructure,
    pub tourism: Tourism,
}
