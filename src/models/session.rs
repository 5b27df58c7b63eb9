//! Session model: the signed-in identity, or its absence.

use serde::{Deserialize, Serialize};

/// Role stored on the account by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Volunteer,
    Admin,
}

/// Authorization role of whoever is viewing the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Anonymous,
    Volunteer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Anonymous => "anonymous",
            Role::Volunteer => "volunteer",
            Role::Admin => "admin",
        }
    }
}

impl From<AccountRole> for Role {
    fn from(role: AccountRole) -> Self {
        match role {
            AccountRole::Volunteer => Role::Volunteer,
            AccountRole::Admin => Role::Admin,
        }
    }
}

/// Identity returned by `GET /me`, `POST /login` and `POST /register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: AccountRole,
}

/// The current session. There is no "user without a role" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn role(&self) -> Role {
        match self {
            Session::Anonymous => Role::Anonymous,
            Session::Authenticated(user) => user.role.into(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

impl From<Option<User>> for Session {
    fn from(user: Option<User>) -> Self {
        user.map_or(Session::Anonymous, Session::Authenticated)
    }
}

/// Request body for `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /register`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub skill: String,
    pub availability: String,
}
