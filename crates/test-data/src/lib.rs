//! Test data generation for the campaign tracker.
//!
//! Generates randomized campaigns and writes them into the `campaigns` table.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let campaigns = CampaignGenerator::new().generate_batch(10, &mut rand::thread_rng());
//! Seeder::new(pool).replace_campaigns(&campaigns).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

use rand::{SeedableRng, rngs::StdRng};

// Re-export core types from campaigns crate
pub use campaigns::models::{CampaignStatus, NewCampaign};

/// Builds the RNG for a seed run: deterministic when `seed` is given.
pub fn seed_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{CampaignGenConfig, SEED_COLORS, SeedConfig};
    pub use crate::db::Seeder;
    pub use crate::generators::CampaignGenerator;
    pub use crate::{CampaignStatus, NewCampaign, seed_rng};
}
