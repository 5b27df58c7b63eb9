//! Data models for the Volunteer Hub client.
//!
//! These models mirror the JSON bodies exchanged with the backend API.

mod application;
mod event;
mod session;
mod volunteer;

pub use application::*;
pub use event::*;
pub use session::*;
pub use volunteer::*;
