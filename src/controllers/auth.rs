//! Login, registration and logout.

use super::{mutation_failed, Outcome};
use crate::access::{landing_page, Location, Page};
use crate::app::App;
use crate::models::{LoginRequest, RegisterRequest};

impl App {
    /// Sign in, then go to the return target, or to the role's landing page.
    pub(crate) async fn submit_login(&mut self, email: String, password: String) -> Outcome {
        let request = LoginRequest { email, password };
        if let Err(source) = self.store.login(&self.api, &request).await {
            return mutation_failed("login", source);
        }
        self.render_all();

        let target = self
            .location
            .return_target
            .unwrap_or_else(|| landing_page(self.store.role()));
        tracing::info!(role = self.store.role().as_str(), "Logged in");
        Outcome::notice("Logged in").and_navigate(Location::new(target))
    }

    pub(crate) async fn submit_register(&mut self, request: RegisterRequest) -> Outcome {
        if let Err(source) = self.store.register(&self.api, &request).await {
            return mutation_failed("register", source);
        }
        self.render_all();

        let target = landing_page(self.store.role());
        tracing::info!(role = self.store.role().as_str(), "Account created");
        Outcome::notice("Account created").and_navigate(Location::new(target))
    }

    /// Sign out locally whatever the backend answers. The page is re-drawn
    /// before anything else, and protected pages are left for the login page.
    pub(crate) async fn logout(&mut self) -> Outcome {
        self.store.logout(&self.api).await;
        self.update_auth_ui();
        self.render_all();

        let outcome = Outcome::notice("Logged out");
        if self.location.page.is_protected() {
            return outcome.and_navigate(Location::new(Page::Login));
        }
        outcome
    }
}
