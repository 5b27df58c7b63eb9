//! Administrative tables.

use serde::Serialize;

use crate::models::{Event, Volunteer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    /// Target of the row's delete action.
    pub event_id: i64,
    pub name: String,
    pub date: String,
    pub category: String,
    pub slots: i64,
    pub applicants: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolunteerRow {
    pub name: String,
    pub skill: String,
    pub availability: String,
}

pub fn render_event_table(events: &[Event]) -> Vec<EventRow> {
    events
        .iter()
        .map(|ev| EventRow {
            event_id: ev.id,
            name: ev.name.clone(),
            date: ev.date.clone(),
            category: ev.category.clone().unwrap_or_default(),
            slots: ev.slots,
            applicants: ev.applicant_count(),
        })
        .collect()
}

pub fn render_volunteer_table(volunteers: &[Volunteer]) -> Vec<VolunteerRow> {
    volunteers
        .iter()
        .map(|vol| VolunteerRow {
            name: vol.name.clone(),
            skill: vol.skill.clone().unwrap_or_default(),
            availability: vol.availability.clone().unwrap_or_default(),
        })
        .collect()
}
