//! Volunteer endpoints.

use reqwest::Method;

use super::{ApiClient, NO_BODY};
use crate::errors::RequestError;
use crate::models::{UpdateProfileRequest, Volunteer};

impl ApiClient {
    /// GET /volunteers - List volunteer profiles (admin).
    pub async fn list_volunteers(&self) -> Result<Vec<Volunteer>, RequestError> {
        self.call(Method::GET, "/volunteers", NO_BODY).await
    }

    /// PUT /volunteers/me - Update the signed-in volunteer's profile.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<Volunteer, RequestError> {
        self.call(Method::PUT, "/volunteers/me", Some(request)).await
    }
}
