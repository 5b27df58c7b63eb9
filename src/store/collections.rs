//! Collection loading.

use super::Store;
use crate::access::{permits, Capability};
use crate::api::ApiClient;
use crate::errors::{AppError, Collection, RequestError};

impl Store {
    /// Replace the events with a fresh fetch; empty on failure.
    pub async fn load_events(&mut self, api: &ApiClient) {
        self.events = absorb(Collection::Events, api.list_events().await);
    }

    /// Replace the volunteers with a fresh fetch; empty on failure.
    pub async fn load_volunteers(&mut self, api: &ApiClient) {
        self.volunteers = absorb(Collection::Volunteers, api.list_volunteers().await);
    }

    /// Replace the applications with a fresh fetch; empty on failure.
    pub async fn load_applications(&mut self, api: &ApiClient) {
        self.applications = absorb(Collection::Applications, api.list_applications().await);
    }

    /// Reload one collection if the current role may see it, otherwise empty it.
    pub async fn reload(&mut self, api: &ApiClient, collection: Collection) {
        let role = self.role();
        match collection {
            Collection::Events => self.load_events(api).await,
            Collection::Volunteers if permits(role, Capability::ViewVolunteers) => {
                self.load_volunteers(api).await
            }
            Collection::Volunteers => self.volunteers = Vec::new(),
            Collection::Applications if permits(role, Capability::TrackApplications) => {
                self.load_applications(api).await
            }
            Collection::Applications => self.applications = Vec::new(),
        }
    }

    /// Load everything the current role may see, in order.
    pub async fn load_data(&mut self, api: &ApiClient) {
        for collection in [
            Collection::Events,
            Collection::Volunteers,
            Collection::Applications,
        ] {
            self.reload(api, collection).await;
        }
        tracing::debug!(
            events = self.events.len(),
            volunteers = self.volunteers.len(),
            applications = self.applications.len(),
            "Data loaded"
        );
    }
}

fn absorb<T>(collection: Collection, result: Result<Vec<T>, RequestError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(source) => {
            tracing::warn!("{}", AppError::Fetch { collection, source });
            Vec::new()
        }
    }
}
