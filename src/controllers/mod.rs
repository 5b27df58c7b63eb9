//! Form controllers.
//!
//! Every handler follows the same protocol: call the API, and on success
//! refresh the affected collections and re-render; on failure surface the
//! error as a notice and leave the store untouched.

mod applications;
mod auth;
mod events;
mod profile;

use serde::Serialize;

use crate::access::Location;
use crate::errors::{AppError, RequestError};
use crate::models::{CreateEventRequest, RegisterRequest, UpdateProfileRequest};
use crate::render::{Filter, Layout, Region};

pub const DETAILS_HINT: &str = "View details on the Events page";
pub const PROFILE_ONLY: &str = "Profile only";

/// A user interaction.
#[derive(Debug, Clone)]
pub enum Action {
    SubmitLogin { email: String, password: String },
    SubmitRegister(RegisterRequest),
    Logout,
    SubmitEvent(CreateEventRequest),
    DeleteEvent(i64),
    SeedSample,
    Apply(i64),
    UpdateProfile(UpdateProfileRequest),
    SelectFilter(Filter),
    ShowDetails,
    ViewVolunteer,
}

/// The control an action comes from. Only controls present on the current
/// page have their handler bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Handler {
    LoginForm,
    RegisterForm,
    LogoutButton,
    EventForm,
    EventTable,
    SeedButton,
    EventGrid,
    ProfileForm,
    FilterBar,
    VolunteerTable,
}

impl Action {
    pub fn handler(&self) -> Handler {
        match self {
            Action::SubmitLogin { .. } => Handler::LoginForm,
            Action::SubmitRegister(_) => Handler::RegisterForm,
            Action::Logout => Handler::LogoutButton,
            Action::SubmitEvent(_) => Handler::EventForm,
            Action::DeleteEvent(_) => Handler::EventTable,
            Action::SeedSample => Handler::SeedButton,
            Action::Apply(_) | Action::ShowDetails => Handler::EventGrid,
            Action::UpdateProfile(_) => Handler::ProfileForm,
            Action::SelectFilter(_) => Handler::FilterBar,
            Action::ViewVolunteer => Handler::VolunteerTable,
        }
    }

    /// Short name used in logs and error classification.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SubmitLogin { .. } => "login",
            Action::SubmitRegister(_) => "register",
            Action::Logout => "logout",
            Action::SubmitEvent(_) => "create event",
            Action::DeleteEvent(_) => "delete event",
            Action::SeedSample => "seed",
            Action::Apply(_) => "apply",
            Action::UpdateProfile(_) => "update profile",
            Action::SelectFilter(_) => "select filter",
            Action::ShowDetails => "show details",
            Action::ViewVolunteer => "view volunteer",
        }
    }
}

/// Handlers a page binds: the logout button lives in the navigation of every
/// page, the rest follow the page's regions.
pub fn bound_handlers(layout: &Layout) -> Vec<Handler> {
    let mut handlers = vec![Handler::LogoutButton];
    for region in layout.regions() {
        let handler = match region {
            Region::LoginForm => Handler::LoginForm,
            Region::RegisterForm => Handler::RegisterForm,
            Region::EventForm => Handler::EventForm,
            Region::EventTable => Handler::EventTable,
            Region::SeedButton => Handler::SeedButton,
            Region::EventGrid => Handler::EventGrid,
            Region::ProfileForm => Handler::ProfileForm,
            Region::FilterBar => Handler::FilterBar,
            Region::VolunteerTable => Handler::VolunteerTable,
            Region::Metrics | Region::MyApplications => continue,
        };
        handlers.push(handler);
    }
    handlers
}

/// What the page should do after an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Option<String>,
    pub navigate: Option<Location>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            notice: Some(message.into()),
            navigate: None,
        }
    }

    pub fn navigate(location: Location) -> Self {
        Self {
            notice: None,
            navigate: Some(location),
        }
    }

    pub fn and_navigate(mut self, location: Location) -> Self {
        self.navigate = Some(location);
        self
    }
}

/// Surface a failed write as a notice.
fn mutation_failed(action: &'static str, source: RequestError) -> Outcome {
    let err = AppError::Mutation { action, source };
    tracing::warn!("{}", err);
    Outcome::notice(err.message())
}
