//! Response types for API endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static confirmation returned by the root endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body produced by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
