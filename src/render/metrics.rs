//! Dashboard counters.

use serde::Serialize;

/// Estimated volunteering hours per volunteer.
pub const HOURS_PER_VOLUNTEER: usize = 4;

pub const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsView {
    pub events: usize,
    /// `None` when no volunteers are loaded.
    pub volunteers: Option<usize>,
    pub hours: usize,
}

impl MetricsView {
    pub fn volunteers_label(&self) -> String {
        self.volunteers
            .map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string())
    }
}

pub fn render_metrics(event_count: usize, volunteer_count: usize) -> MetricsView {
    MetricsView {
        events: event_count,
        volunteers: (volunteer_count > 0).then_some(volunteer_count),
        hours: volunteer_count * HOURS_PER_VOLUNTEER,
    }
}
