//! Event endpoints.

use reqwest::Method;

use super::{ApiClient, NO_BODY};
use crate::errors::RequestError;
use crate::models::{CreateEventRequest, Event};

impl ApiClient {
    /// GET /events - List all events with their derived fields.
    pub async fn list_events(&self) -> Result<Vec<Event>, RequestError> {
        self.call(Method::GET, "/events", NO_BODY).await
    }

    /// POST /events - Create an event (admin).
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event, RequestError> {
        self.call(Method::POST, "/events", Some(request)).await
    }

    /// DELETE /events/:id - Remove an event (admin).
    pub async fn delete_event(&self, id: i64) -> Result<(), RequestError> {
        self.send(Method::DELETE, &format!("/events/{}", id), NO_BODY)
            .await
    }

    /// POST /seed - Load the sample data set (admin).
    pub async fn seed(&self) -> Result<(), RequestError> {
        self.send(Method::POST, "/seed", NO_BODY).await
    }
}
