//! Event grid and admin event management.

use super::{mutation_failed, Outcome, DETAILS_HINT};
use crate::app::App;
use crate::errors::Collection;
use crate::models::CreateEventRequest;
use crate::render::Filter;

impl App {
    pub(crate) async fn submit_event(&mut self, request: CreateEventRequest) -> Outcome {
        if let Err(source) = self.api.create_event(&request).await {
            return mutation_failed("create event", source);
        }
        self.store.reload(&self.api, Collection::Events).await;
        self.render_all();
        Outcome::notice("Event Added")
    }

    pub(crate) async fn delete_event(&mut self, event_id: i64) -> Outcome {
        if let Err(source) = self.api.delete_event(event_id).await {
            return mutation_failed("delete event", source);
        }
        self.store.reload(&self.api, Collection::Events).await;
        self.render_all();
        Outcome::notice("Event removed")
    }

    pub(crate) async fn seed_sample(&mut self) -> Outcome {
        if let Err(source) = self.api.seed().await {
            return mutation_failed("seed", source);
        }
        self.store.load_data(&self.api).await;
        self.render_all();
        Outcome::notice("Sample data loaded")
    }

    pub(crate) fn select_filter(&mut self, filter: Filter) -> Outcome {
        tracing::debug!(filter = filter.as_str(), "Filter selected");
        self.filter = filter;
        self.render_all();
        Outcome::none()
    }

    pub(crate) fn show_details(&self) -> Outcome {
        Outcome::notice(DETAILS_HINT)
    }
}
