// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-kecamatan lookup tables and the ratios used to derive statistics.
//!
//! Only area, population, island, coastline and the tourism lists are looked
//! up. Everything else is derived from those with the ratio constants below.
//! The ratios are design constants chosen for the profile site, not survey
//! data. Functions taking an RNG add jitter and return placeholder values.

use crate::models::stats::{
    AgeGroups, Agriculture, CropProduction, Demographics, Economy, EducationLevels, Fishery,
    Infrastructure, Livestock, NaturalResources, Schools, Tourism,
};
use rand::Rng;

/// Area used for names missing from the table (km²).
pub const DEFAULT_AREA_KM2: f64 = 75.0;
/// Population used for names missing from the table.
pub const DEFAULT_POPULATION: u32 = 15_000;
const DEFAULT_ISLAND: &str = "Pulau Sabu";
const DEFAULT_COASTLINE_KM: f64 = 20.0;
const DEFAULT_ACCOMMODATIONS: u32 = 1;
const DEFAULT_BASE_VISITORS: u32 = 1_000;

// ─── Design constants ────────────────────────────────────────

pub const MALE_RATIO: f64 = 0.51;
/// Children (0-14) then productive (15-64); elderly get the remainder.
const AGE_RATIOS: [f64; 2] = [0.30, 0.62];
/// No schooling, elementary, junior high, senior high; higher education gets
/// the remainder.
const EDUCATION_RATIOS: [f64; 4] = [0.15, 0.40, 0.20, 0.18];
const HOUSEHOLD_SIZE: f64 = 4.6;

pub const AGRICULTURAL_AREA_RATIO: f64 = 0.60;
const RICE_FIELD_RATIO: f64 = 0.08;
const FOREST_RATIO: f64 = 0.15;
const ROAD_KM_PER_KM2: f64 = 0.9;

/// Tons per km² of planted area.
const RICE_YIELD: f64 = 350.0;
const CORN_YIELD: f64 = 280.0;
const MUNG_BEAN_YIELD: f64 = 110.0;
const SORGHUM_YIELD: f64 = 250.0;
/// Share of agricultural land planted with corn, mung bean, sorghum.
const CORN_SHARE: f64 = 0.25;
const MUNG_BEAN_SHARE: f64 = 0.10;
const SORGHUM_SHARE: f64 = 0.08;

/// Head per 1000 inhabitants: cattle, buffalo, goats, pigs, horses, chickens.
const LIVESTOCK_PER_1000: [f64; 6] = [95.0, 22.0, 180.0, 210.0, 14.0, 900.0];
const LIVESTOCK_JITTER: f64 = 0.15;

const CAPTURE_TONS_PER_COAST_KM: f64 = 12.0;
const SEAWEED_TONS_PER_COAST_KM: f64 = 20.0;
const RAIJUA_SEAWEED_TONS_PER_COAST_KM: f64 = 85.0;
const FISHER_RATIO: f64 = 0.06;
const LONTAR_PER_KM2: f64 = 420.0;
const SALT_TONS_PER_COAST_KM: f64 = 3.5;

const BASE_SECTORS: [&str; 3] = ["Pertanian", "Peternakan", "Perikanan"];
const MINERALS: [&str; 2] = ["Batu kapur", "Pasir"];

// ─── Lookup table ────────────────────────────────────────────

struct KnownDistrict {
    name: &'static str,
    area: f64,
    population: u32,
    island: &'static str,
    coastline_km: f64,
    extra_sector: Option<&'static str>,
    destinations: &'static [&'static str],
    cultural_sites: &'static [&'static str],
    accommodations: u32,
    base_visitors: u32,
}

const KNOWN_DISTRICTS: [KnownDistrict; 6] = [
    KnownDistrict {
        name: "Sabu Barat",
        area: 185.16,
        population: 27_450,
        island: "Pulau Sabu",
        coastline_km: 38.5,
        extra_sector: Some("Perdagangan dan jasa"),
        destinations: &["Pantai Napae", "Pantai Wadu Mea", "Bukit Deme"],
        cultural_sites: &["Kampung Adat Namata", "Rumah Adat Ammu Hawu"],
        accommodations: 12,
        base_visitors: 4_200,
    },
    KnownDistrict {
        name: "Sabu Tengah",
        area: 93.59,
        population: 12_480,
        island: "Pulau Sabu",
        coastline_km: 14.2,
        extra_sector: None,
        destinations: &["Gua Lie Madira", "Pantai Raeloro"],
        cultural_sites: &["Kampung Adat Ledeana"],
        accommodations: 2,
        base_visitors: 900,
    },
    KnownDistrict {
        name: "Sabu Timur",
        area: 81.78,
        population: 14_230,
        island: "Pulau Sabu",
        coastline_km: 22.6,
        extra_sector: None,
        destinations: &["Pantai Cemara Bolou", "Pantai Wuihebo"],
        cultural_sites: &["Kampung Adat Bolou"],
        accommodations: 3,
        base_visitors: 1_300,
    },
    KnownDistrict {
        name: "Sabu Liae",
        area: 93.43,
        population: 13_860,
        island: "Pulau Sabu",
        coastline_km: 24.1,
        extra_sector: None,
        destinations: &["Kelabba Maja", "Pantai Rae Mea"],
        cultural_sites: &["Kampung Adat Ledelo"],
        accommodations: 3,
        base_visitors: 2_600,
    },
    KnownDistrict {
        name: "Hawu Mehara",
        area: 104.20,
        population: 18_370,
        island: "Pulau Sabu",
        coastline_km: 27.8,
        extra_sector: None,
        destinations: &["Pantai Kolorae", "Gua Lie Jaka"],
        cultural_sites: &["Kampung Adat Kolorame"],
        accommodations: 2,
        base_visitors: 1_100,
    },
    KnownDistrict {
        name: "Raijua",
        area: 36.38,
        population: 9_640,
        island: "Pulau Raijua",
        coastline_km: 31.4,
        extra_sector: Some("Budidaya rumput laut"),
        destinations: &["Pantai Ledeke", "Pulau Dana", "Tebing Ledeunu"],
        cultural_sites: &["Kampung Adat Ketita"],
        accommodations: 2,
        base_visitors: 1_800,
    },
];

fn lookup(name: &str) -> Option<&'static KnownDistrict> {
    let name = name.trim();
    KNOWN_DISTRICTS
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
}

/// Names with exact table entries, in Kemendagri order.
pub fn known_district_names() -> impl Iterator<Item = &'static str> {
    KNOWN_DISTRICTS.iter().map(|d| d.name)
}

pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

pub fn area_of(name: &str) -> f64 {
    lookup(name).map_or(DEFAULT_AREA_KM2, |d| d.area)
}

pub fn population_of(name: &str) -> u32 {
    lookup(name).map_or(DEFAULT_POPULATION, |d| d.population)
}

pub fn island_of(name: &str) -> &'static str {
    lookup(name).map_or(DEFAULT_ISLAND, |d| d.island)
}

fn coastline_of(name: &str) -> f64 {
    lookup(name).map_or(DEFAULT_COASTLINE_KM, |d| d.coastline_km)
}

// ─── Derived blocks ──────────────────────────────────────────

pub fn demographics_of(name: &str) -> Demographics {
    let total = population_of(name);
    let area = area_of(name);

    let male = (((total as f64) * MALE_RATIO).round() as u32).min(total);
    let female = total - male;
    let age = split_by_ratios(total, &AGE_RATIOS);
    let education = split_by_ratios(total, &EDUCATION_RATIOS);

    Demographics {
        total_population: total,
        male_population: male,
        female_population: female,
        density: round2(total as f64 / area),
        households: (total as f64 / HOUSEHOLD_SIZE).round() as u32,
        age_groups: AgeGroups {
            children: age[0],
            productive: age[1],
            elderly: age[2],
        },
        education: EducationLevels {
            no_schooling: education[0],
            elementary: education[1],
            junior_high: education[2],
            senior_high: education[3],
            higher_education: education[4],
        },
    }
}

/// Jittered.
pub fn economy_of<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Economy {
    let population = population_of(name) as f64;

    let mut main_sectors: Vec<String> = BASE_SECTORS.iter().map(|s| s.to_string()).collect();
    if let Some(extra) = lookup(name).and_then(|d| d.extra_sector) {
        main_sectors.push(extra.to_string());
    }

    Economy {
        gdp_per_capita: 17_500_000 + rng.random_range(0..=4_000_000u64),
        poverty_rate: round2(rng.random_range(24.0..32.0)),
        unemployment_rate: round2(rng.random_range(1.5..4.5)),
        msme_count: (population / 45.0 * rng.random_range(0.9..1.1)).round() as u32,
        main_sectors,
    }
}

/// Crop and fishery figures are deterministic; livestock counts are jittered.
pub fn agriculture_of<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Agriculture {
    let area = area_of(name);
    let population = population_of(name) as f64;
    let coastline = coastline_of(name);

    let agricultural_area = area * AGRICULTURAL_AREA_RATIO;
    let rice_field_area = area * RICE_FIELD_RATIO;

    let head: Vec<u32> = LIVESTOCK_PER_1000
        .iter()
        .map(|per_1000| {
            let jitter = rng.random_range(1.0 - LIVESTOCK_JITTER..1.0 + LIVESTOCK_JITTER);
            (population / 1000.0 * per_1000 * jitter).round() as u32
        })
        .collect();
    let livestock = Livestock {
        cattle: head[0],
        buffalo: head[1],
        goats: head[2],
        pigs: head[3],
        horses: head[4],
        chickens: head[5],
    };

    let seaweed_rate = if island_of(name) == "Pulau Raijua" {
        RAIJUA_SEAWEED_TONS_PER_COAST_KM
    } else {
        SEAWEED_TONS_PER_COAST_KM
    };

    Agriculture {
        agricultural_area: round2(agricultural_area),
        rice_field_area: round2(rice_field_area),
        crops: CropProduction {
            rice: round2(rice_field_area * RICE_YIELD),
            corn: round2(agricultural_area * CORN_SHARE * CORN_YIELD),
            mung_bean: round2(agricultural_area * MUNG_BEAN_SHARE * MUNG_BEAN_YIELD),
            sorghum: round2(agricultural_area * SORGHUM_SHARE * SORGHUM_YIELD),
        },
        livestock,
        fishery: Fishery {
            capture: round2(coastline * CAPTURE_TONS_PER_COAST_KM),
            seaweed: round2(coastline * seaweed_rate),
            fishers: (population * FISHER_RATIO).round() as u32,
        },
    }
}

pub fn natural_resources_of(name: &str) -> NaturalResources {
    let area = area_of(name);
    let coastline = coastline_of(name);

    NaturalResources {
        forest_area: round2(area * FOREST_RATIO),
        coastline_km: coastline,
        lontar_trees: (area * LONTAR_PER_KM2).round() as u32,
        salt_production: round2(coastline * SALT_TONS_PER_COAST_KM),
        water_sources: ((area / 8.0).round() as u32).max(1),
        minerals: MINERALS.iter().map(|m| m.to_string()).collect(),
    }
}

/// Facility counts are deterministic; percentages are jittered.
pub fn infrastructure_of<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Infrastructure {
    let area = area_of(name);
    let population = population_of(name) as f64;
    let per = |people: f64| ((population / people).round() as u32).max(1);

    Infrastructure {
        road_length_km: round2(area * ROAD_KM_PER_KM2),
        good_road_percentage: round2(rng.random_range(45.0..75.0)),
        electrification_percentage: round2(rng.random_range(70.0..95.0)),
        clean_water_percentage: round2(rng.random_range(55.0..85.0)),
        health_centers: per(12_000.0),
        integrated_health_posts: per(350.0),
        schools: Schools {
            elementary: per(850.0),
            junior_high: per(2_800.0),
            senior_high: per(7_000.0),
        },
        places_of_worship: per(550.0),
    }
}

/// Destination lists are looked up; visitor numbers are jittered.
pub fn tourism_of<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Tourism {
    let to_strings = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
    let known = lookup(name);
    let base_visitors = known.map_or(DEFAULT_BASE_VISITORS, |d| d.base_visitors) as f64;

    Tourism {
        destinations: known.map_or_else(Vec::new, |d| to_strings(d.destinations)),
        cultural_sites: known.map_or_else(Vec::new, |d| to_strings(d.cultural_sites)),
        accommodations: known.map_or(DEFAULT_ACCOMMODATIONS, |d| d.accommodations),
        annual_visitors: (base_visitors * rng.random_range(0.8..1.2)).round() as u32,
    }
}

// ─── Helpers ─────────────────────────────────────────────────

/// Split `total` into `ratios.len() + 1` buckets that sum to exactly `total`.
///
/// Each bucket is the rounded share, capped by what is left; the final
/// bucket takes the remainder.
pub fn split_by_ratios(total: u32, ratios: &[f64]) -> Vec<u32> {
    let mut remaining = total;
    let mut buckets = Vec::with_capacity(ratios.len() + 1);
    for ratio in ratios {
        let share = ((total as f64) * ratio).round() as u32;
        let share = share.min(remaining);
        remaining -= share;
        buckets.push(share);
    }
    buckets.push(remaining);
    buckets
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
