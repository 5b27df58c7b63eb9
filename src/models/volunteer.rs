//! Volunteer profile model, visible to admins only.

use serde::{Deserialize, Serialize};

/// A volunteer profile as listed by `GET /volunteers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

/// Request body for `PUT /volunteers/me`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    pub skill: String,
    pub availability: String,
}
