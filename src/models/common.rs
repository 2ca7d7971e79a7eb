use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Message safe to display to the participant
    pub error: String,
    /// Stable machine-readable code, e.g. `NOT_FOUND`
    pub code: String,
}
