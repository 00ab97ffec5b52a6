use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Chart colors assigned to campaigns created through the API.
pub const GRAPH_COLORS: [&str; 6] = [
    "#2563eb", "#16a34a", "#d97706", "#dc2626", "#8b5cf6", "#0891b2",
];

/// Picks a display color uniformly from `palette`.
pub fn pick_color(palette: &[&'static str], rng: &mut impl Rng) -> &'static str {
    palette.choose(rng).copied().unwrap_or(GRAPH_COLORS[0])
}

/// Conventional campaign status values. The column itself accepts any text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Paused,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 2] = [CampaignStatus::Active, CampaignStatus::Paused];

    /// Returns the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
        }
    }
}

/// A stored campaign row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Campaign {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub clicks: i32,
    pub cost: f64,
    pub impressions: i32,
    /// Hex color, assigned by the server.
    pub color: String,
}

/// Campaign fields ready for insertion; `id` is assigned by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCampaign {
    pub name: String,
    pub status: String,
    pub clicks: i32,
    pub cost: f64,
    pub impressions: i32,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_pick_color_stays_in_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let color = pick_color(&GRAPH_COLORS, &mut rng);
            assert!(GRAPH_COLORS.contains(&color));
        }
    }

    #[test]
    fn test_pick_color_reaches_every_entry() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: std::collections::HashSet<&str> =
            (0..500).map(|_| pick_color(&GRAPH_COLORS, &mut rng)).collect();
        assert_eq!(seen.len(), GRAPH_COLORS.len());
    }

    #[test]
    fn test_campaign_serializes_all_fields() {
        let campaign = Campaign {
            id: 3,
            name: "Summer Sale".to_string(),
            status: CampaignStatus::Active.as_str().to_string(),
            clicks: 120,
            cost: 99.5,
            impressions: 3000,
            color: "#2563eb".to_string(),
        };
        let value = serde_json::to_value(&campaign).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "name": "Summer Sale",
                "status": "Active",
                "clicks": 120,
                "cost": 99.5,
                "impressions": 3000,
                "color": "#2563eb",
            })
        );
    }
}
