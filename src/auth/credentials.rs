//! Durable credential store: the bearer token and the cached user profile.
//!
//! Storage layout is two keys in one namespace: `token` holds the raw
//! bearer string, `me` holds the JSON-serialized [`UserProfile`]. All
//! reads and writes of those keys go through this module so the
//! token/profile pairing invariant has a single enforcement point.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures explicitly, but nothing here propagates
//! them: a failed write leaves storage unchanged, a failed or malformed
//! read degrades to "absent". A visitor who cannot persist a token is
//! simply treated as logged out.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use super::backend;
use crate::net::types::UserProfile;

const TOKEN_KEY: &str = "token";
const PROFILE_KEY: &str = "me";

/// The persisted bearer token, or `None` if nothing is stored.
pub fn get_token() -> Option<String> {
    backend::get(TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Persist a bearer token. An empty token is a no-op, not a clear;
/// removal only happens through [`clear_auth`].
pub fn set_token(token: &str) {
    if token.is_empty() {
        return;
    }
    if let Err(e) = backend::set(TOKEN_KEY, token) {
        leptos::logging::warn!("token not persisted: {e}");
    }
}

/// Remove both the token and the profile. Idempotent.
pub fn clear_auth() {
    backend::remove(TOKEN_KEY);
    backend::remove(PROFILE_KEY);
}

/// Persist the cached profile, or clear the record when `None`.
/// Best-effort: a serialization or storage failure leaves the previous
/// record in place.
pub fn set_profile(profile: Option<&UserProfile>) {
    match profile {
        Some(p) => match serde_json::to_string(p) {
            Ok(json) => {
                if let Err(e) = backend::set(PROFILE_KEY, &json) {
                    leptos::logging::warn!("profile not persisted: {e}");
                }
            }
            Err(e) => {
                leptos::logging::warn!("profile not serializable: {e}");
            }
        },
        None => backend::remove(PROFILE_KEY),
    }
}

/// The cached profile, or `None` if nothing is stored, the stored record
/// does not parse, or it carries neither an id nor an email.
pub fn get_profile() -> Option<UserProfile> {
    let raw = backend::get(PROFILE_KEY)?;
    serde_json::from_str::<UserProfile>(&raw)
        .ok()
        .filter(UserProfile::is_valid)
}

/// `("Authorization", "Bearer <token>")` when a token exists.
pub fn auth_header() -> Option<(&'static str, String)> {
    get_token().map(|t| ("Authorization", format!("Bearer {t}")))
}

/// Persist token and profile as one session. Callers above the store use
/// this and [`clear_session`] rather than the individual setters, so the
/// two records never drift apart.
pub fn store_session(token: &str, profile: &UserProfile) {
    set_token(token);
    set_profile(Some(profile));
}

/// Drop the whole session. Same end state as [`clear_auth`].
pub fn clear_session() {
    clear_auth();
}
