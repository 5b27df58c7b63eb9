//! Configuration module for the Volunteer Hub client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// How the driver prints a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API, without a trailing slash
    pub api_base: String,
    /// Page to open first, e.g. `index.html` or `volunteer.html`
    pub start_page: String,
    /// Display limit of the home page event grid (0 = no limit)
    pub grid_limit: usize,
    /// How long a notice stays visible
    pub notice_ttl: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Credentials to sign in with through the login page
    pub credentials: Option<(String, String)>,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:5000/api".to_string(),
            start_page: "index.html".to_string(),
            grid_limit: 3,
            notice_ttl: Duration::from_millis(2000),
            log_level: "info".to_string(),
            credentials: None,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let api_base = env::var("VOLUNTEER_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let start_page = env::var("VOLUNTEER_PAGE").unwrap_or(defaults.start_page);

        let grid_limit = parse_var("VOLUNTEER_GRID_LIMIT").unwrap_or(defaults.grid_limit);

        let notice_ttl = parse_var("VOLUNTEER_NOTICE_TTL_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.notice_ttl);

        let log_level = env::var("VOLUNTEER_LOG_LEVEL").unwrap_or(defaults.log_level);

        let credentials = match (env::var("VOLUNTEER_EMAIL"), env::var("VOLUNTEER_PASSWORD")) {
            (Ok(email), Ok(password)) => Some((email, password)),
            _ => None,
        };

        let output = match env::var("VOLUNTEER_OUTPUT").as_deref() {
            Ok("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            api_base,
            start_page,
            grid_limit,
            notice_ttl,
            log_level,
            credentials,
            output,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Invalid {} value {:?}, using default", key, raw);
            None
        }
    }
}
