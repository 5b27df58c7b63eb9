//! Error handling module for the Volunteer Hub client.
//!
//! Every API failure is normalized into a single `RequestError`. `AppError`
//! classifies a failure by where it happened, which decides how it is absorbed.

use reqwest::StatusCode;
use serde::Deserialize;

/// Message shown when the backend gives no usable `{error}` body.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const AUTH_ERROR: &str = "AUTH_ERROR";
    pub const FETCH_ERROR: &str = "FETCH_ERROR";
    pub const MUTATION_ERROR: &str = "MUTATION_ERROR";
}

/// What went wrong on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// The backend answered outside the success range.
    Status(StatusCode),
    /// The request never produced a response.
    Transport,
    /// A success response carried a body we could not decode.
    Decode,
}

/// The one failure type produced by the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub kind: RequestErrorKind,
    pub message: String,
}

/// Error body shape used by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl RequestError {
    /// Build the error for a non-success response, taking the message from a
    /// `{"error": "..."}` body when one is present.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());

        Self {
            kind: RequestErrorKind::Status(status),
            message,
        }
    }

    pub fn transport(err: &reqwest::Error) -> Self {
        tracing::debug!("Transport error: {:?}", err);
        Self {
            kind: RequestErrorKind::Transport,
            message: GENERIC_FAILURE.to_string(),
        }
    }

    pub fn decode(err: &serde_json::Error) -> Self {
        tracing::debug!("Undecodable response body: {:?}", err);
        Self {
            kind: RequestErrorKind::Decode,
            message: format!("Invalid response: {}", err),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self.kind {
            RequestErrorKind::Status(status) => Some(status),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RequestError {}

/// Client-side collections that can fail to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Events,
    Volunteers,
    Applications,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Volunteers => "volunteers",
            Collection::Applications => "applications",
        }
    }
}

/// Application error type.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Session absent or invalid; treated as anonymous
    Auth(RequestError),
    /// A collection load failed; the collection is reset to empty
    Fetch {
        collection: Collection,
        source: RequestError,
    },
    /// A write action failed; surfaced as a notice, state untouched
    Mutation {
        action: &'static str,
        source: RequestError,
    },
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => codes::AUTH_ERROR,
            AppError::Fetch { .. } => codes::FETCH_ERROR,
            AppError::Mutation { .. } => codes::MUTATION_ERROR,
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Auth(source) => &source.message,
            AppError::Fetch { source, .. } => &source.message,
            AppError::Mutation { source, .. } => &source.message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Auth(source) => write!(f, "{}: {}", self.error_code(), source),
            AppError::Fetch { collection, source } => write!(
                f,
                "{}: loading {} failed: {}",
                self.error_code(),
                collection.as_str(),
                source
            ),
            AppError::Mutation { action, source } => {
                write!(f, "{}: {} failed: {}", self.error_code(), action, source)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Auth(source) => Some(source),
            AppError::Fetch { source, .. } => Some(source),
            AppError::Mutation { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_error_body() {
        let err = RequestError::from_status(
            StatusCode::UNAUTHORIZED,
            br#"{"error":"Invalid credentials"}"#,
        );
        assert_eq!(err.message, "Invalid credentials");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_generic_message_without_error_body() {
        let html = RequestError::from_status(StatusCode::NOT_FOUND, b"<h1>Not Found</h1>");
        assert_eq!(html.message, GENERIC_FAILURE);

        let other_shape = RequestError::from_status(StatusCode::BAD_REQUEST, br#"{"detail":"x"}"#);
        assert_eq!(other_shape.message, GENERIC_FAILURE);

        let empty = RequestError::from_status(StatusCode::BAD_REQUEST, br#"{"error":""}"#);
        assert_eq!(empty.message, GENERIC_FAILURE);
    }

    #[test]
    fn test_error_display() {
        let source =
            RequestError::from_status(StatusCode::BAD_REQUEST, br#"{"error":"Event full"}"#);
        assert_eq!(source.to_string(), "Event full");

        let err = AppError::Mutation {
            action: "apply",
            source: source.clone(),
        };
        assert_eq!(err.error_code(), codes::MUTATION_ERROR);
        assert_eq!(err.message(), "Event full");
        assert_eq!(err.to_string(), "MUTATION_ERROR: apply failed: Event full");

        let err = AppError::Fetch {
            collection: Collection::Volunteers,
            source,
        };
        assert_eq!(
            err.to_string(),
            "FETCH_ERROR: loading volunteers failed: Event full"
        );
    }
}
