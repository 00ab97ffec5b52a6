//! Request body types for API endpoints.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{errors::AppError, models::NewCampaign};

/// Campaign creation request. `id` and `color` are assigned by the server.
///
/// `name` and `status` are free text stored in unbounded columns.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCampaignRequest {
    pub name: String,
    /// Conventionally "Active" or "Paused".
    pub status: String,
    #[validate(range(min = 0, message = "Clicks must be non-negative"))]
    pub clicks: i32,
    #[validate(range(min = 0.0, message = "Cost must be non-negative"))]
    pub cost: f64,
    #[validate(range(min = 0, message = "Impressions must be non-negative"))]
    pub impressions: i32,
}

impl CreateCampaignRequest {
    /// Checks field constraints, joining every violation into one message.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(|e| {
            let mut messages: Vec<String> = e
                .field_errors()
                .into_iter()
                .flat_map(|(_, errors)| {
                    errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                })
                .collect();
            messages.sort();
            AppError::InvalidInput(messages.join(", "))
        })
    }

    /// Pairs the validated fields with a server-chosen color.
    pub fn into_new_campaign(self, color: &str) -> NewCampaign {
        NewCampaign {
            name: self.name,
            status: self.status,
            clicks: self.clicks,
            cost: self.cost,
            impressions: self.impressions,
            color: color.to_string(),
        }
    }
}
