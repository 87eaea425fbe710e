//! REST API client for the coach server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Every outgoing
//! request picks up the credential store's auth header; the injected
//! `Authorization` value wins over anything a caller supplied, whenever a
//! token exists. Server-side (SSR): stubs returning transport errors since
//! these endpoints are only meaningful in the browser.
//!
//! Single-shot request/response only: no retries, timeouts, or backoff.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::auth::credentials;
use crate::net::types::{
    InterviewSession, LoginRequest, RegisterRequest, TokenResponse, UserProfile,
};

/// Base address of the API server, resolved at build time.
/// `COACH_API_BASE` overrides the local development default.
pub fn api_base() -> String {
    option_env!("COACH_API_BASE")
        .unwrap_or("http://localhost:8000")
        .trim_end_matches('/')
        .to_owned()
}

/// A failed API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status. `detail` carries the
    /// body's `detail` field when the server explained itself.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// True for a 401, the signal that the stored token is no longer
    /// accepted server-side.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Normalize a failure into a human-readable message.
///
/// Priority: the server's structured `detail` first, then the transport
/// message, then a fixed fallback. A server that explained the failure
/// always wins over generic transport text.
pub fn as_error(err: &ApiError) -> String {
    match err {
        ApiError::Status {
            detail: Some(detail),
            ..
        } if !detail.is_empty() => detail.clone(),
        ApiError::Transport(msg) if !msg.is_empty() => msg.clone(),
        _ => "Unknown error".to_owned(),
    }
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned));
    ApiError::Status { status, detail }
}

/// GET a JSON resource, authenticated with the stored token if one exists.
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let bearer = credentials::get_token();
    get_json_with(path, bearer.as_deref()).await
}

/// GET a JSON resource with an explicit bearer token (or none). Used
/// directly by the login flow, which holds a token not yet persisted.
async fn get_json_with<T: DeserializeOwned>(
    path: &str,
    bearer: Option<&str>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{path}", api_base());
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(t) = bearer {
            req = req.header("Authorization", &format!("Bearer {t}"));
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, bearer);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// POST a JSON body, authenticated with the stored token if one exists.
async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{path}", api_base());
        let mut req = gloo_net::http::Request::post(&url);
        if let Some((name, value)) = credentials::auth_header() {
            req = req.header(name, &value);
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Log in and establish a session.
///
/// Exchanges credentials for a token, fetches the profile with that token,
/// then persists the pair in one step so no observer sees a token without
/// a profile.
///
/// # Errors
///
/// Returns the failed call's [`ApiError`]; on failure nothing is persisted.
pub async fn login(email: &str, password: &str) -> Result<UserProfile, ApiError> {
    let body = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    let token: TokenResponse = post_json("/auth/login", &body).await?;
    let profile: UserProfile = get_json_with("/auth/me", Some(&token.access_token)).await?;
    credentials::store_session(&token.access_token, &profile);
    Ok(profile)
}

/// Create an account via `POST /auth/register`. Does not log in; callers
/// send the visitor to the login page on success.
///
/// # Errors
///
/// Returns the failed call's [`ApiError`].
pub async fn register(name: &str, email: &str, password: &str) -> Result<UserProfile, ApiError> {
    let body = RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    };
    post_json("/auth/register", &body).await
}

/// Fetch the caller's interview sessions from `GET /interview/sessions/me`.
///
/// # Errors
///
/// Returns the failed call's [`ApiError`]; a 401 means the stored token
/// was rejected server-side.
pub async fn my_sessions() -> Result<Vec<InterviewSession>, ApiError> {
    get_json("/interview/sessions/me").await
}

/// Hit the API root as a connectivity check.
///
/// # Errors
///
/// Returns the failed call's [`ApiError`].
pub async fn ping() -> Result<String, ApiError> {
    #[derive(serde::Deserialize)]
    struct RootResponse {
        message: String,
    }
    let body: RootResponse = get_json("/").await?;
    Ok(body.message)
}
