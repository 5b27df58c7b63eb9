//! Page runtime.
//!
//! `App` is the explicit application state of one page load: API client,
//! store, location, layout, active filter, bound handlers, last rendered view
//! and notices. Opening a page runs the initialization sequence in a fixed
//! order, each step awaited before the next:
//!
//! 1. refresh the session (the role decides what gets loaded)
//! 2. bind the page's handlers and update the auth-dependent navigation
//! 3. load the collections the role may see
//! 4. run the access guard
//! 5. render
//!
//! A guard redirect ends the load before anything is rendered.

mod notice;

pub use notice::*;

use std::time::Duration;

use chrono::Utc;

use crate::access::{guard, GuardDecision, Location, Page};
use crate::api::ApiClient;
use crate::config::Config;
use crate::controllers::{bound_handlers, Action, Handler, Outcome};
use crate::render::{render_nav, render_page, Filter, Layout, NavView, PageView, RenderContext};
use crate::store::Store;

/// Page-independent settings derived from `Config`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub home_grid_limit: usize,
    pub notice_ttl: Duration,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            home_grid_limit: config.grid_limit,
            notice_ttl: config.notice_ttl,
        }
    }
}

/// Result of opening a page.
pub enum PageLoad {
    Ready(App),
    Redirect(Location),
}

pub struct App {
    pub(crate) api: ApiClient,
    pub(crate) store: Store,
    pub(crate) location: Location,
    pub(crate) layout: Layout,
    pub(crate) filter: Filter,
    pub(crate) handlers: Vec<Handler>,
    pub(crate) nav: NavView,
    pub(crate) view: Option<PageView>,
    pub(crate) notices: NoticeBoard,
}

impl App {
    fn new(api: ApiClient, settings: &Settings, location: Location) -> Self {
        let store = Store::new();
        Self {
            nav: render_nav(store.session()),
            api,
            store,
            location,
            layout: Layout::for_page(location.page, settings.home_grid_limit),
            filter: Filter::All,
            handlers: Vec::new(),
            view: None,
            notices: NoticeBoard::new(settings.notice_ttl),
        }
    }

    /// Load `location` and run the initialization sequence.
    pub async fn open(api: ApiClient, settings: &Settings, location: Location) -> PageLoad {
        tracing::info!(page = %location, "Opening page");
        let mut app = Self::new(api, settings, location);

        app.store.refresh_session(&app.api).await;
        app.bind_handlers();
        app.store.load_data(&app.api).await;

        if let GuardDecision::Redirect(to) = guard(location.page, app.store.role()) {
            tracing::info!(from = %location, to = %to, "Access denied, redirecting");
            return PageLoad::Redirect(to);
        }

        app.render_all();
        PageLoad::Ready(app)
    }

    fn bind_handlers(&mut self) {
        self.handlers = bound_handlers(&self.layout);
        self.update_auth_ui();
    }

    /// Re-draw the auth-dependent navigation only.
    pub(crate) fn update_auth_ui(&mut self) {
        self.nav = render_nav(self.store.session());
        if let Some(view) = &mut self.view {
            view.nav = self.nav.clone();
        }
    }

    /// Re-draw every region of the page from the store.
    pub(crate) fn render_all(&mut self) {
        let view = render_page(&RenderContext {
            session: self.store.session(),
            events: self.store.events(),
            volunteers: self.store.volunteers(),
            applications: self.store.applications(),
            filter: &self.filter,
            layout: &self.layout,
        });
        self.nav = view.nav.clone();
        self.view = Some(view);
    }

    /// Run a user action. Actions from controls that are not on this page are ignored.
    pub async fn dispatch(&mut self, action: Action) -> Outcome {
        let handler = action.handler();
        if !self.handlers.contains(&handler) {
            tracing::debug!(
                action = action.name(),
                page = self.location.page.file_name(),
                "No handler bound, ignoring"
            );
            return Outcome::none();
        }

        let outcome = match action {
            Action::SubmitLogin { email, password } => self.submit_login(email, password).await,
            Action::SubmitRegister(request) => self.submit_register(request).await,
            Action::Logout => self.logout().await,
            Action::SubmitEvent(request) => self.submit_event(request).await,
            Action::DeleteEvent(event_id) => self.delete_event(event_id).await,
            Action::SeedSample => self.seed_sample().await,
            Action::Apply(event_id) => self.apply(event_id).await,
            Action::UpdateProfile(request) => self.update_profile(request).await,
            Action::SelectFilter(filter) => self.select_filter(filter),
            Action::ShowDetails => self.show_details(),
            Action::ViewVolunteer => self.view_volunteer(),
        };

        if let Some(message) = &outcome.notice {
            self.notices.push(message.clone(), Utc::now());
        }
        outcome
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn page(&self) -> Page {
        self.location.page
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn nav(&self) -> &NavView {
        &self.nav
    }

    /// The last rendered view. Always present on a page that finished loading.
    pub fn view(&self) -> Option<&PageView> {
        self.view.as_ref()
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}
