//! Request/response types shared with the API server.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated principal, cached client-side for display and guard
/// checks. The server always sends a full record; every field is optional
/// here so a partially populated or stale cached copy still deserializes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    /// A cached profile counts as a real identity only if it carries an id
    /// or a non-empty email.
    pub fn is_valid(&self) -> bool {
        self.id.is_some() || self.email.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Best available display string: name, then email, then id.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_owned();
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            return email.to_owned();
        }
        self.id.map_or_else(String::new, |id| format!("user #{id}"))
    }
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response from `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// One interview session row from `GET /interview/sessions/me`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InterviewSession {
    pub id: i64,
    pub scenario_id: i64,
    pub status: String,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub ended_at: Option<String>,
}
