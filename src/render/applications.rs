//! The volunteer's own applications.

use serde::Serialize;

use crate::models::{Application, Session};

pub const LOGIN_PROMPT: &str = "Login to track applications.";
pub const NO_APPLICATIONS: &str = "No applications yet.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationRow {
    pub event_name: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationsView {
    LoginPrompt,
    Empty,
    Rows(Vec<ApplicationRow>),
}

impl ApplicationsView {
    /// Placeholder text, if this view shows one.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ApplicationsView::LoginPrompt => Some(LOGIN_PROMPT),
            ApplicationsView::Empty => Some(NO_APPLICATIONS),
            ApplicationsView::Rows(_) => None,
        }
    }
}

pub fn render_applications(session: &Session, applications: &[Application]) -> ApplicationsView {
    if !session.is_authenticated() {
        return ApplicationsView::LoginPrompt;
    }
    if applications.is_empty() {
        return ApplicationsView::Empty;
    }
    ApplicationsView::Rows(
        applications
            .iter()
            .map(|app| ApplicationRow {
                event_name: app.event_name.clone(),
                status: app.status.clone(),
            })
            .collect(),
    )
}
