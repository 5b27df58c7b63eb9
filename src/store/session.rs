//! Session operations.

use super::Store;
use crate::api::ApiClient;
use crate::errors::{AppError, RequestError};
use crate::models::{LoginRequest, RegisterRequest, Session};

impl Store {
    /// Re-read the session from `GET /me`. Any failure means anonymous.
    pub async fn refresh_session(&mut self, api: &ApiClient) {
        self.session = match api.me().await {
            Ok(user) => Session::from(user),
            Err(source) => {
                tracing::debug!("{}", AppError::Auth(source));
                Session::Anonymous
            }
        };
        tracing::debug!(role = self.session.role().as_str(), "Session refreshed");
    }

    /// Sign in, then refresh the session so role-based branching sees the new user.
    pub async fn login(
        &mut self,
        api: &ApiClient,
        request: &LoginRequest,
    ) -> Result<(), RequestError> {
        api.login(request).await?;
        self.refresh_session(api).await;
        Ok(())
    }

    /// Create an account, then refresh the session.
    pub async fn register(
        &mut self,
        api: &ApiClient,
        request: &RegisterRequest,
    ) -> Result<(), RequestError> {
        api.register(request).await?;
        self.refresh_session(api).await;
        Ok(())
    }

    /// Sign out. Succeeds locally whatever the backend says.
    pub async fn logout(&mut self, api: &ApiClient) {
        if let Err(e) = api.logout().await {
            tracing::debug!("Ignoring logout failure: {}", e);
        }
        self.session = Session::Anonymous;
        self.volunteers = Vec::new();
        self.applications = Vec::new();
    }
}
