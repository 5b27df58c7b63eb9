//! Which UI regions each page carries.

use serde::Serialize;

use crate::access::Page;

/// A region of a page that a sub-renderer or a handler attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Metrics,
    FilterBar,
    EventGrid,
    MyApplications,
    EventTable,
    VolunteerTable,
    LoginForm,
    RegisterForm,
    EventForm,
    ProfileForm,
    SeedButton,
}

const HOME: &[Region] = &[Region::Metrics, Region::EventGrid];
const EVENTS: &[Region] = &[Region::FilterBar, Region::EventGrid];
const LOGIN: &[Region] = &[Region::LoginForm, Region::RegisterForm];
const VOLUNTEER: &[Region] = &[
    Region::FilterBar,
    Region::EventGrid,
    Region::MyApplications,
    Region::ProfileForm,
];
const ADMIN: &[Region] = &[
    Region::Metrics,
    Region::EventForm,
    Region::SeedButton,
    Region::EventTable,
    Region::VolunteerTable,
];

/// The regions of one page. Navigation is on every page and not listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub page: Page,
    regions: &'static [Region],
    /// Maximum number of event cards, 0 for no limit.
    pub grid_limit: usize,
}

impl Layout {
    /// Layout of `page`. `home_grid_limit` caps the teaser grid on the home page.
    pub fn for_page(page: Page, home_grid_limit: usize) -> Self {
        let (regions, grid_limit) = match page {
            Page::Home => (HOME, home_grid_limit),
            Page::Events => (EVENTS, 0),
            Page::Login => (LOGIN, 0),
            Page::Volunteer => (VOLUNTEER, 0),
            Page::Admin => (ADMIN, 0),
        };
        Self {
            page,
            regions,
            grid_limit,
        }
    }

    pub fn has(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }

    pub fn regions(&self) -> &'static [Region] {
        self.regions
    }
}
