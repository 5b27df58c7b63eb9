//! Role-based access control.
//!
//! One authorization table (`permits`) answers every "may this role..."
//! question: the page guard, the data loader and the renderer all consult it.

use url::form_urlencoded;

use crate::models::Role;

/// Query parameter carrying the return target on the login page.
pub const RETURN_TARGET_PARAM: &str = "redirect";

/// Things a role may or may not do or see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Enter admin-only pages
    AdminArea,
    /// Enter volunteer-only pages
    VolunteerArea,
    /// See the admin navigation links
    AdminLinks,
    /// Create, delete and seed events
    ManageEvents,
    /// Fetch and see volunteer profiles
    ViewVolunteers,
    /// Fetch and see one's own applications
    TrackApplications,
    /// Get the apply action on event cards
    ApplyToEvents,
}

/// The authorization table.
pub fn permits(role: Role, capability: Capability) -> bool {
    use Capability::*;

    match (role, capability) {
        (Role::Admin, AdminArea | AdminLinks | ManageEvents | ViewVolunteers) => true,
        (Role::Volunteer, VolunteerArea | TrackApplications | ApplyToEvents) => true,
        // Volunteer pages do not turn admins away.
        (Role::Admin, VolunteerArea) => true,
        _ => false,
    }
}

/// Pages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Events,
    Login,
    Volunteer,
    Admin,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Events,
        Page::Login,
        Page::Volunteer,
        Page::Admin,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Events => "events.html",
            Page::Login => "login.html",
            Page::Volunteer => "volunteer.html",
            Page::Admin => "admin.html",
        }
    }

    /// Resolve a path such as `/app/admin.html` by its last segment.
    /// An empty path is the home page.
    pub fn from_path(path: &str) -> Option<Page> {
        let name = path.rsplit('/').next().unwrap_or_default();
        if name.is_empty() {
            return Some(Page::Home);
        }
        Self::ALL.into_iter().find(|p| p.file_name() == name)
    }

    /// Capability needed to view the page, `None` for public pages.
    pub fn requirement(&self) -> Option<Capability> {
        match self {
            Page::Admin => Some(Capability::AdminArea),
            Page::Volunteer => Some(Capability::VolunteerArea),
            Page::Home | Page::Events | Page::Login => None,
        }
    }

    pub fn is_protected(&self) -> bool {
        self.requirement().is_some()
    }
}

/// A page plus an optional return target, e.g. `login.html?redirect=admin.html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub page: Page,
    pub return_target: Option<Page>,
}

impl Location {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            return_target: None,
        }
    }

    /// The login page, remembering where the user was headed.
    pub fn login_returning_to(target: Page) -> Self {
        Self {
            page: Page::Login,
            return_target: Some(target),
        }
    }

    pub fn href(&self) -> String {
        match self.return_target {
            Some(target) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(RETURN_TARGET_PARAM, target.file_name())
                    .finish();
                format!("{}?{}", self.page.file_name(), query)
            }
            None => self.page.file_name().to_string(),
        }
    }

    /// Parse an href. Return targets naming unknown pages are dropped.
    pub fn parse(href: &str) -> Option<Location> {
        let (path, query) = match href.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (href, None),
        };
        let page = Page::from_path(path)?;

        let return_target = query.and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == RETURN_TARGET_PARAM)
                .filter(|(_, value)| !value.is_empty())
                .and_then(|(_, value)| Page::from_path(&value))
        });

        Some(Location {
            page,
            return_target,
        })
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.href())
    }
}

/// Outcome of the page guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Location),
}

/// Decide whether `role` may see `page`.
///
/// Anonymous visitors of a protected page go to login with the page as return
/// target; signed-in users lacking the page's capability go to the volunteer page.
pub fn guard(page: Page, role: Role) -> GuardDecision {
    let Some(requirement) = page.requirement() else {
        return GuardDecision::Allow;
    };

    if role == Role::Anonymous {
        return GuardDecision::Redirect(Location::login_returning_to(page));
    }

    if permits(role, requirement) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Location::new(Page::Volunteer))
    }
}

/// Where a freshly signed-in user lands when no return target is pending.
pub fn landing_page(role: Role) -> Page {
    if permits(role, Capability::AdminArea) {
        Page::Admin
    } else {
        Page::Volunteer
    }
}
