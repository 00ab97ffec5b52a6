//! Configuration types for test data generation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Colors used for seeded campaigns. Differs from the API's palette.
pub const SEED_COLORS: [&str; 6] = [
    "#2563eb", "#94a3b8", "#16a34a", "#d97706", "#8b5cf6", "#ef4444",
];

/// Number of campaigns a default seed run writes.
pub const DEFAULT_SEED_COUNT: usize = 10;

/// Value ranges for generated campaigns. All bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignGenConfig {
    pub clicks: RangeInclusive<i32>,
    /// Cost in currency units; generated values are rounded to cents.
    pub cost: RangeInclusive<f64>,
    pub impressions: RangeInclusive<i32>,
}

impl Default for CampaignGenConfig {
    fn default() -> Self {
        Self {
            clicks: 100..=5000,
            cost: 50.0..=1000.0,
            impressions: 5000..=50000,
        }
    }
}

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of campaigns to insert after clearing the table.
    pub count: usize,

    /// Fixed RNG seed for reproducible data.
    pub rng_seed: Option<u64>,

    pub generator: CampaignGenConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SEED_COUNT,
            rng_seed: None,
            generator: CampaignGenConfig::default(),
        }
    }
}

impl SeedConfig {
    /// Reads `SEED_RNG`. An unparsable value is ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_rng_var(std::env::var("SEED_RNG").ok().as_deref())
    }

    /// Builds the default configuration with an optional raw `SEED_RNG` value.
    pub fn from_rng_var(raw: Option<&str>) -> Self {
        let rng_seed = raw.and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|_| tracing::warn!("Ignoring SEED_RNG={raw}: not a u64"))
                .ok()
        });

        Self {
            rng_seed,
            ..Self::default()
        }
    }
}
