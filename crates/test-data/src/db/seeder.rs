//! Database seeding utilities.

use campaigns::{database::Database, errors::AppError, models::NewCampaign};
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Campaign storage error: {0}")]
    Storage(#[from] AppError),
}

/// Database seeder for replacing campaign rows with generated ones.
///
/// Each statement runs on its own; a failure partway through leaves the rows
/// inserted so far in place.
pub struct Seeder {
    pool: PgPool,
    db: Database,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            db: Database::new(pool.clone()),
            pool,
        }
    }

    /// Creates the campaigns table if it does not exist yet.
    pub async fn prepare(&self) -> Result<(), SeedError> {
        self.db.ensure_schema().await?;
        Ok(())
    }

    /// Deletes every campaign row, returning how many were removed.
    pub async fn clear_campaigns(&self) -> Result<u64, SeedError> {
        let result = sqlx::query("DELETE FROM campaigns")
            .execute(&self.pool)
            .await?;

        info!("Cleared {} existing campaigns", result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Seeds campaigns into the database.
    pub async fn seed_campaigns(&self, campaigns: &[NewCampaign]) -> Result<(), SeedError> {
        info!("Seeding {} campaigns...", campaigns.len());

        for campaign in campaigns {
            let stored = self.db.create_campaign(campaign).await?;
            debug!(id = stored.id, name = %stored.name, "Inserted campaign");
        }

        info!("Seeded {} campaigns", campaigns.len());
        Ok(())
    }

    /// Wipes the table and inserts `campaigns` in its place.
    pub async fn replace_campaigns(&self, campaigns: &[NewCampaign]) -> Result<(), SeedError> {
        self.prepare().await?;
        self.clear_campaigns().await?;
        self.seed_campaigns(campaigns).await
    }
}
