//! Reactive session identity shared across the UI.
//!
//! DESIGN
//! ======
//! `App` constructs one `RwSignal<SessionState>` from [`SessionState::restore`]
//! and provides it via context; components read it reactively and mutate it
//! through the methods here, inside a single `signal.update(..)` call, so
//! the in-memory value and the credential store always change together.
//! The signal is a read-through cache of the credential store — on
//! disagreement, the store wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::auth::credentials;
use crate::net::types::UserProfile;

/// In-memory view of the current session identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    profile: Option<UserProfile>,
}

impl SessionState {
    /// Bootstrap state from the credential store's cached profile.
    /// Called once, when `App` constructs the shared signal.
    pub fn restore() -> Self {
        Self {
            profile: credentials::get_profile(),
        }
    }

    /// The cached identity, or `None` when logged out.
    pub fn current(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// Set or clear the identity, persisting the `me` record in the same
    /// operation. Does not touch the token.
    pub fn set_identity(&mut self, profile: Option<UserProfile>) {
        credentials::set_profile(profile.as_ref());
        self.profile = profile;
    }

    /// Drop the session: clears the identity here and both persisted
    /// records (token and profile) in one call.
    pub fn logout(&mut self) {
        credentials::clear_session();
        self.profile = None;
    }
}
