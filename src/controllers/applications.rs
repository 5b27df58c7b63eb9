//! Applying to events.

use super::{mutation_failed, Outcome};
use crate::access::{permits, Capability, Location, Page};
use crate::app::App;
use crate::errors::Collection;
use crate::render::{card_action, CardAction};

impl App {
    /// Apply to an event. Without a session no request is made; the user is
    /// sent to login and brought back to the volunteer page afterwards.
    ///
    /// Only roles allowed to apply may write, and only while the loaded card
    /// offers the apply action. Events missing from the store are left to the
    /// backend to judge.
    pub(crate) async fn apply(&mut self, event_id: i64) -> Outcome {
        let role = self.store.role();
        if !self.store.session().is_authenticated() {
            return Outcome::navigate(Location::login_returning_to(Page::Volunteer));
        }
        if !permits(role, Capability::ApplyToEvents) {
            tracing::debug!(role = role.as_str(), event_id, "Role may not apply, ignoring");
            return Outcome::none();
        }
        let offered = self
            .store
            .events()
            .iter()
            .find(|ev| ev.id == event_id)
            .map(|ev| card_action(role, ev));
        if let Some(action) = offered.filter(|a| !matches!(a, CardAction::Apply { .. })) {
            tracing::debug!(event_id, action = action.label(), "Card offers no apply, ignoring");
            return Outcome::none();
        }

        if let Err(source) = self.api.apply(event_id).await {
            return mutation_failed("apply", source);
        }
        self.store.reload(&self.api, Collection::Events).await;
        self.store.reload(&self.api, Collection::Applications).await;
        self.render_all();
        Outcome::notice("Application submitted")
    }
}
