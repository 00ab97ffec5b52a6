//! Default seed script - replaces all campaigns with ten generated ones
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```
//!
//! Set `SEED_RNG=<u64>` for reproducible data.

use sqlx::postgres::PgPoolOptions;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    let mut rng = seed_rng(config.rng_seed);
    let generated =
        CampaignGenerator::with_config(config.generator.clone()).generate_batch(config.count, &mut rng);

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("DATABASE_URL not set; using local default");
        campaigns::config::DEFAULT_DATABASE_URL.to_string()
    });

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    Seeder::new(pool.clone()).replace_campaigns(&generated).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Campaigns: {}", generated.len());
    for campaign in &generated {
        tracing::info!(
            "  {} [{}] clicks={} cost={:.2} impressions={} color={}",
            campaign.name,
            campaign.status,
            campaign.clicks,
            campaign.cost,
            campaign.impressions,
            campaign.color
        );
    }

    pool.close().await;
    Ok(())
}
