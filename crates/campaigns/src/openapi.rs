//! OpenAPI document assembled from the handler annotations.

use utoipa::OpenApi;

use crate::{
    models::Campaign,
    types::{CreateCampaignRequest, ErrorResponse, MessageResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Campaign API", description = "List and create advertising campaigns"),
    paths(
        crate::handlers::status::root,
        crate::handlers::status::health_check,
        crate::handlers::campaigns::list_campaigns,
        crate::handlers::campaigns::create_campaign,
    ),
    components(schemas(Campaign, CreateCampaignRequest, MessageResponse, ErrorResponse)),
    tags(
        (name = "status", description = "Service status"),
        (name = "campaigns", description = "Campaign records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_campaign_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/campaigns"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
