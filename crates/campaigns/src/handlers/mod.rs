//! HTTP request handlers for the campaigns API.

pub mod campaigns;
pub mod status;

// Re-export handlers (including utoipa __path types for OpenAPI)
pub use campaigns::{
    __path_create_campaign, __path_list_campaigns, create_campaign, list_campaigns,
};
pub use status::{__path_health_check, __path_root, health_check, root};
