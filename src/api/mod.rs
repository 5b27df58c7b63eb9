//! Backend API client.
//!
//! `ApiClient::call` is the single primitive every endpoint wrapper is built
//! on. It always sends the session cookie and a JSON content type, and turns
//! any non-success answer into a `RequestError`.

mod applications;
mod events;
mod session;
mod volunteers;

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::RequestError;

/// HTTP client for the backend API.
///
/// Clones share one connection pool and one cookie jar, so a session cookie
/// set by `POST /login` is sent by every later call.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<str>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform a request and decode the JSON success body.
    pub async fn call<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = self.execute(method, path, body).await?;
        serde_json::from_slice(&bytes).map_err(|e| RequestError::decode(&e))
    }

    /// Perform a request whose success body is not needed.
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), RequestError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, body).await.map(|_| ())
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>, RequestError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.client.request(method.clone(), self.url(path));
        if let Some(body) = body {
            let json = serde_json::to_vec(body).map_err(|e| RequestError::decode(&e))?;
            request = request.body(json);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::transport(&e))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RequestError::transport(&e))?;

        tracing::debug!(%method, path, status = status.as_u16(), "API call");

        if !status.is_success() {
            return Err(RequestError::from_status(status, &bytes));
        }

        Ok(bytes.to_vec())
    }
}

/// Placeholder body type for requests that send none.
pub(crate) const NO_BODY: Option<&()> = None;
