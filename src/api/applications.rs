//! Application endpoints.

use reqwest::Method;

use super::{ApiClient, NO_BODY};
use crate::errors::RequestError;
use crate::models::{Application, ApplyRequest};

impl ApiClient {
    /// GET /applications - The signed-in volunteer's applications.
    pub async fn list_applications(&self) -> Result<Vec<Application>, RequestError> {
        self.call(Method::GET, "/applications", NO_BODY).await
    }

    /// POST /applications - Apply to an event.
    pub async fn apply(&self, event_id: i64) -> Result<Application, RequestError> {
        self.call(
            Method::POST,
            "/applications",
            Some(&ApplyRequest { event_id }),
        )
        .await
    }
}
