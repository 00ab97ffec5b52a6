use crate::errors::AppError;
use crate::models::{Campaign, NewCampaign};
use sqlx::PgPool;

/// Storage handle for the `campaigns` table.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the `campaigns` table and its name index when absent.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS campaigns (
                id          SERIAL PRIMARY KEY,
                name        VARCHAR NOT NULL,
                status      VARCHAR NOT NULL,
                clicks      INTEGER NOT NULL,
                cost        DOUBLE PRECISION NOT NULL,
                impressions INTEGER NOT NULL,
                color       VARCHAR NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS ix_campaigns_name ON campaigns (name)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Round-trips a trivial query to confirm the database is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn all_campaigns(&self) -> Result<Vec<Campaign>, AppError> {
        let campaigns: Vec<Campaign> = sqlx::query_as(
            r#"
            SELECT id, name, status, clicks, cost, impressions, color
            FROM campaigns
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(campaigns)
    }

    /// Inserts a campaign and returns the stored row with its generated id.
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, AppError> {
        let created = sqlx::query_as(
            r#"
            INSERT INTO campaigns (name, status, clicks, cost, impressions, color)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, status, clicks, cost, impressions, color
            "#,
        )
        .bind(&campaign.name)
        .bind(&campaign.status)
        .bind(campaign.clicks)
        .bind(campaign.cost)
        .bind(campaign.impressions)
        .bind(&campaign.color)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn count_campaigns(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM campaigns")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
