//! Session endpoints: `/me`, `/login`, `/register`, `/logout`.

use reqwest::Method;

use super::{ApiClient, NO_BODY};
use crate::errors::RequestError;
use crate::models::{LoginRequest, RegisterRequest, User};

impl ApiClient {
    /// GET /me - The signed-in user, or `None` when the backend answers `null`.
    pub async fn me(&self) -> Result<Option<User>, RequestError> {
        self.call(Method::GET, "/me", NO_BODY).await
    }

    /// POST /login - Sets the session cookie on success.
    pub async fn login(&self, request: &LoginRequest) -> Result<(), RequestError> {
        self.send(Method::POST, "/login", Some(request)).await
    }

    /// POST /register - Creates the account and signs it in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), RequestError> {
        self.send(Method::POST, "/register", Some(request)).await
    }

    /// POST /logout
    pub async fn logout(&self) -> Result<(), RequestError> {
        self.send(Method::POST, "/logout", NO_BODY).await
    }
}
