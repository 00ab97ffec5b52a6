//! Root message and health check handlers.

use axum::{Extension, http::StatusCode, response::Json};

use crate::{database::Database, errors::AppError, types::MessageResponse};

pub const ROOT_MESSAGE: &str = "Campaign API is running";

/// Static confirmation that the service is up.
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses(
        (status = 200, description = "Service is running", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// Health check endpoint. Reports 503 when the database cannot be reached.
#[utoipa::path(
    get,
    path = "/health",
    tag = "status",
    responses(
        (status = 200, description = "Health check passed"),
        (status = 503, description = "Database unavailable", body = crate::types::ErrorResponse)
    )
)]
pub async fn health_check(Extension(db): Extension<Database>) -> Result<StatusCode, AppError> {
    db.ping().await.map_err(|e| {
        tracing::warn!("Health check failed: {e}");
        AppError::Unavailable
    })?;
    Ok(StatusCode::OK)
}
