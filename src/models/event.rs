//! Event model matching the backend event payload.

use serde::{Deserialize, Serialize};

/// A volunteering event as listed by `GET /events`.
///
/// `applicants`, `slots_left` and `applied` are computed server-side; the
/// client only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub slots: i64,
    #[serde(default)]
    pub applicants: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots_left: Option<i64>,
    #[serde(default)]
    pub applied: Option<bool>,
}

impl Event {
    /// Remaining open spots: the server value when present, otherwise
    /// `slots - applicants`. Never negative.
    pub fn slots_left(&self) -> u64 {
        let left = self
            .slots_left
            .unwrap_or_else(|| self.slots.saturating_sub(self.applicant_count()));
        left.max(0) as u64
    }

    pub fn applicant_count(&self) -> i64 {
        self.applicants.unwrap_or(0)
    }

    /// Whether the current volunteer already holds an application for this event.
    pub fn is_applied(&self) -> bool {
        self.applied.unwrap_or(false)
    }

    pub fn has_open_slots(&self) -> bool {
        self.slots_left() > 0
    }

    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => "general",
        }
    }
}

/// Request body for `POST /events`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub date: String,
    pub venue: String,
    pub category: String,
    pub slots: i64,
    pub tagline: String,
}
