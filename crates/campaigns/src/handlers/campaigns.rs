//! Campaign listing and creation handlers.

use axum::{
    Extension,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::{
    database::Database,
    errors::AppError,
    models::{Campaign, GRAPH_COLORS, pick_color},
    types::{CreateCampaignRequest, ErrorResponse},
};

/// List every stored campaign.
#[utoipa::path(
    get,
    path = "/campaigns",
    tag = "campaigns",
    responses(
        (status = 200, description = "All campaigns", body = Vec<Campaign>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_campaigns(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<Campaign>>, AppError> {
    let campaigns = db.all_campaigns().await?;
    Ok(Json(campaigns))
}

/// Create a campaign. The display color is chosen by the server.
#[utoipa::path(
    post,
    path = "/campaigns",
    tag = "campaigns",
    request_body = CreateCampaignRequest,
    responses(
        (status = 201, description = "Campaign created", body = Campaign),
        (status = 400, description = "Field constraint violated", body = ErrorResponse),
        (status = 422, description = "Missing or mistyped field", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_campaign(
    Extension(db): Extension<Database>,
    payload: Result<Json<CreateCampaignRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Campaign>), AppError> {
    let Json(req) = payload?;
    req.check()?;

    let color = pick_color(&GRAPH_COLORS, &mut rand::thread_rng());
    let campaign = db.create_campaign(&req.into_new_campaign(color)).await?;

    info!(id = campaign.id, color = %campaign.color, "Created campaign");

    Ok((StatusCode::CREATED, Json(campaign)))
}
