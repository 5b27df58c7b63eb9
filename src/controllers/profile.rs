//! Volunteer profile.

use super::{mutation_failed, Outcome, PROFILE_ONLY};
use crate::access::{Location, Page};
use crate::app::App;
use crate::errors::Collection;
use crate::models::UpdateProfileRequest;

impl App {
    pub(crate) async fn update_profile(&mut self, request: UpdateProfileRequest) -> Outcome {
        if !self.store.session().is_authenticated() {
            return Outcome::navigate(Location::login_returning_to(Page::Volunteer));
        }

        if let Err(source) = self.api.update_profile(&request).await {
            return mutation_failed("update profile", source);
        }
        self.store.reload(&self.api, Collection::Volunteers).await;
        self.render_all();
        Outcome::notice("Profile updated")
    }

    pub(crate) fn view_volunteer(&self) -> Outcome {
        Outcome::notice(PROFILE_ONLY)
    }
}
