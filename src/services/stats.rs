// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Statistics providers for kecamatan enrichment.

use crate::models::DistrictStats;
use crate::services::tables;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source of per-kecamatan statistics, keyed by display name.
///
/// Implementations must not fail: unknown names get default figures and
/// `DistrictStats::known == false`.
pub trait DistrictStatsProvider: Send + Sync {
    fn stats_for(&self, name: &str) -> DistrictStats;
}

/// Default provider backed by the in-memory lookup tables.
///
/// Jittered fields come from an RNG derived from the seed and the district
/// name, so a seeded provider returns identical figures for the same name
/// regardless of feature order. Without a seed the RNG is drawn from OS
/// entropy and every call returns different placeholder numbers.
#[derive(Debug, Clone, Default)]
pub struct TableStatsProvider {
    seed: Option<u64>,
}

impl TableStatsProvider {
    /// Reproducible provider.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Provider whose jittered fields change on every call.
    pub fn unseeded() -> Self {
        Self { seed: None }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng_for(&self, name: &str) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ name_hash(name)),
            None => StdRng::from_os_rng(),
        }
    }
}

impl DistrictStatsProvider for TableStatsProvider {
    fn stats_for(&self, name: &str) -> DistrictStats {
        let mut rng = self.rng_for(name);

        DistrictStats {
            known: tables::is_known(name),
            area: tables::area_of(name),
            population: tables::population_of(name),
            island: tables::island_of(name).to_string(),
            demographics: tables::demographics_of(name),
            economy: tables::economy_of(name, &mut rng),
            agriculture: tables::agriculture_of(name, &mut rng),
            natural_resources: tables::natural_resources_of(name),
            infrastructure: tables::infrastructure_of(name, &mut rng),
            tourism: tables::tourism_of(name, &mut rng),
        }
    }
}

/// FNV-1a over the normalized name; stable across builds.
fn name_hash(name: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    name.trim()
        .bytes()
        .map(|b| b.to_ascii_lowercase())
        .fold(OFFSET, |hash, b| (hash ^ b as u64).wrapping_mul(PRIME))
}
