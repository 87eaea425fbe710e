//! Static route table and the pre-transition navigation guard.
//!
//! The guard is a pure, synchronous decision over the route table and
//! token presence — no network calls. A token that exists but has expired
//! server-side still passes; that only surfaces when a later API call
//! comes back 401.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::auth::credentials;

/// Where unauthenticated visitors get redirected.
pub const LOGIN_PATH: &str = "/login";

/// One entry in the static route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub requires_auth: bool,
}

/// The application's routing surface, declared once at startup.
/// Must stay in sync with the `<Route>` declarations in `app.rs`.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/",
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/login",
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/register",
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/ping",
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/interview",
        requires_auth: true,
    },
];

/// Outcome of the guard for one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    RedirectToLogin,
}

/// Guard decision for a destination, given whether a token is stored.
/// Paths not in the table are allowed; the router's fallback handles them.
pub fn decide(path: &str, has_token: bool) -> NavigationDecision {
    let requires_auth = ROUTES
        .iter()
        .find(|r| r.path == path)
        .is_some_and(|r| r.requires_auth);
    if requires_auth && !has_token {
        NavigationDecision::RedirectToLogin
    } else {
        NavigationDecision::Allow
    }
}

/// Guard decision for a destination, consulting the credential store.
pub fn check_navigation(path: &str) -> NavigationDecision {
    decide(path, credentials::get_token().is_some())
}
