//! Client-side store: the session plus the three server-synced collections.
//!
//! Collections are only ever replaced wholesale, either by a successful fetch
//! or by an empty list when a fetch fails or the role may no longer see them.
//! The client never edits individual entries.

mod collections;
mod session;

use crate::models::{Application, Event, Role, Session, Volunteer};

#[derive(Debug, Clone, Default)]
pub struct Store {
    session: Session,
    events: Vec<Event>,
    volunteers: Vec<Volunteer>,
    applications: Vec<Application>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn role(&self) -> Role {
        self.session.role()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn volunteers(&self) -> &[Volunteer] {
        &self.volunteers
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }
}
