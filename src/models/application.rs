//! Event application model, visible to the owning volunteer only.

use serde::{Deserialize, Serialize};

/// One of the current volunteer's applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request body for `POST /applications`.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyRequest {
    pub event_id: i64,
}
