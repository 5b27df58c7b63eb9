//! Volunteer Hub client engine
//!
//! Client-side state synchronization and view rendering for the Volunteer Hub
//! event coordination platform: session and collection stores synced from the
//! backend JSON API, a role-based access guard, a pure page renderer and the
//! form controllers that tie them together.

pub mod access;
pub mod api;
pub mod app;
pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod render;
pub mod store;

pub use access::{Location, Page};
pub use api::ApiClient;
pub use app::{App, PageLoad, Settings};
pub use config::Config;
pub use controllers::{Action, Outcome};
