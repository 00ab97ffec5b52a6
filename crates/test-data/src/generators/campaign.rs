//! Campaign generation with marketing-style names.

use campaigns::models::{CampaignStatus, NewCampaign, pick_color};
use fake::{Fake, faker::company::en::CatchPhrase};
use rand::{Rng, seq::SliceRandom};

use crate::config::{CampaignGenConfig, SEED_COLORS};

/// Rounds to two decimal places.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generates random campaigns for seeding.
pub struct CampaignGenerator {
    config: CampaignGenConfig,
}

impl CampaignGenerator {
    /// Creates a new campaign generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: CampaignGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: CampaignGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single campaign.
    pub fn generate(&self, rng: &mut impl Rng) -> NewCampaign {
        let name: String = CatchPhrase().fake_with_rng(rng);
        let status = CampaignStatus::ALL
            .choose(rng)
            .copied()
            .unwrap_or(CampaignStatus::Active);

        NewCampaign {
            name,
            status: status.as_str().to_string(),
            clicks: rng.gen_range(self.config.clicks.clone()),
            cost: round_to_cents(rng.gen_range(self.config.cost.clone())),
            impressions: rng.gen_range(self.config.impressions.clone()),
            color: pick_color(&SEED_COLORS, rng).to_string(),
        }
    }

    /// Generates multiple campaigns.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<NewCampaign> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for CampaignGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generate_campaign_within_ranges() {
        let campaign_gen = CampaignGenerator::new();
        let mut rng = rand::thread_rng();

        for campaign in campaign_gen.generate_batch(200, &mut rng) {
            assert!(!campaign.name.is_empty());
            assert!(campaign.status == "Active" || campaign.status == "Paused");
            assert!((100..=5000).contains(&campaign.clicks));
            assert!((50.0..=1000.0).contains(&campaign.cost));
            assert!((5000..=50000).contains(&campaign.impressions));
            assert!(SEED_COLORS.contains(&campaign.color.as_str()));
        }
    }

    #[test]
    fn test_cost_has_at_most_two_decimals() {
        let campaign_gen = CampaignGenerator::new();
        let mut rng = StdRng::seed_from_u64(9);

        for campaign in campaign_gen.generate_batch(100, &mut rng) {
            let cents = campaign.cost * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "cost {}", campaign.cost);
        }
    }

    #[test]
    fn test_batch_size() {
        let campaign_gen = CampaignGenerator::new();
        let mut rng = rand::thread_rng();
        assert_eq!(campaign_gen.generate_batch(10, &mut rng).len(), 10);
        assert!(campaign_gen.generate_batch(0, &mut rng).is_empty());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let campaign_gen = CampaignGenerator::new();
        let a = campaign_gen.generate_batch(10, &mut StdRng::seed_from_u64(12345));
        let b = campaign_gen.generate_batch(10, &mut StdRng::seed_from_u64(12345));
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_ranges() {
        let campaign_gen = CampaignGenerator::with_config(CampaignGenConfig {
            clicks: 7..=7,
            cost: 10.0..=10.0,
            impressions: 1..=1,
        });
        let campaign = campaign_gen.generate(&mut rand::thread_rng());
        assert_eq!(campaign.clicks, 7);
        assert_eq!(campaign.cost, 10.0);
        assert_eq!(campaign.impressions, 1);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(99.499), 99.5);
        assert_eq!(round_to_cents(50.0), 50.0);
        assert_eq!(round_to_cents(123.456), 123.46);
    }
}
