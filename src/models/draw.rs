use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::assignment_result_entity as result_entity;

/// One giver -> receiver pairing of a draw plus its private retrieval token.
/// Written once as part of a batch and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub draw_id: String,
    pub draw_name: String,
    pub giver: String,
    pub receiver: String,
    pub result_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<result_entity::Model> for AssignmentRecord {
    fn from(m: result_entity::Model) -> Self {
        AssignmentRecord {
            draw_id: m.draw_id,
            draw_name: m.draw_name,
            giver: m.giver,
            receiver: m.receiver,
            result_id: m.result_id,
            created_at: m.created_at,
        }
    }
}

/// Draw request after trimming and filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraw {
    pub draw_name: String,
    pub participants: Vec<String>,
}

/// Create draw request
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrawRequest {
    /// Display name of the draw, e.g. "Office 2025"
    #[serde(default)]
    pub draw_name: String,
    /// Participant names in entry order; blank entries are ignored
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Private link for one participant
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DrawLink {
    /// Giver this link belongs to
    pub name: String,
    /// URL (or `#result/...` fragment) resolving to the giver's result
    pub link: String,
}

/// Create draw response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrawResponse {
    pub draw_id: String,
    pub links: Vec<DrawLink>,
}

/// The single pairing a retrieval token grants access to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    pub draw_name: String,
    pub giver: String,
    pub receiver: String,
}

impl From<AssignmentRecord> for ResultResponse {
    fn from(r: AssignmentRecord) -> Self {
        ResultResponse {
            draw_name: r.draw_name,
            giver: r.giver,
            receiver: r.receiver,
        }
    }
}

/// Query-string form of retrieval
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ResultQuery {
    pub result_id: Option<String>,
}
