//! View rendering.
//!
//! `render_page` is a pure function from the store contents, the active filter
//! and the page layout to a `PageView`. Rendering the same inputs twice gives
//! equal views, so callers re-render unconditionally after every mutation.
//! Regions missing from the layout come out as `None`.

mod applications;
mod events;
mod layout;
mod metrics;
mod nav;
mod tables;
mod text;

pub use applications::*;
pub use events::*;
pub use layout::*;
pub use metrics::*;
pub use nav::*;
pub use tables::*;

use serde::Serialize;

use crate::access::{permits, Capability};
use crate::models::{Application, Event, Session, Volunteer};

/// Everything a render reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub session: &'a Session,
    pub events: &'a [Event],
    pub volunteers: &'a [Volunteer],
    pub applications: &'a [Application],
    pub filter: &'a Filter,
    pub layout: &'a Layout,
}

/// View model of a whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub page: &'static str,
    pub nav: NavView,
    pub metrics: Option<MetricsView>,
    pub filters: Option<FilterBarView>,
    pub event_grid: Option<GridView>,
    pub my_applications: Option<ApplicationsView>,
    pub event_table: Option<Vec<EventRow>>,
    pub volunteer_table: Option<Vec<VolunteerRow>>,
}

pub fn render_page(ctx: &RenderContext<'_>) -> PageView {
    let layout = ctx.layout;
    let role = ctx.session.role();

    PageView {
        page: layout.page.file_name(),
        nav: render_nav(ctx.session),
        metrics: layout
            .has(Region::Metrics)
            .then(|| render_metrics(ctx.events.len(), ctx.volunteers.len())),
        filters: layout
            .has(Region::FilterBar)
            .then(|| render_filter_bar(ctx.events, ctx.filter)),
        event_grid: layout
            .has(Region::EventGrid)
            .then(|| render_grid(role, ctx.events, ctx.filter, layout.grid_limit)),
        my_applications: layout
            .has(Region::MyApplications)
            .then(|| render_applications(ctx.session, ctx.applications)),
        event_table: (layout.has(Region::EventTable)
            && permits(role, Capability::ManageEvents))
        .then(|| render_event_table(ctx.events)),
        volunteer_table: (layout.has(Region::VolunteerTable)
            && permits(role, Capability::ViewVolunteers))
        .then(|| render_volunteer_table(ctx.volunteers)),
    }
}
