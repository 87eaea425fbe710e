//! Key-value storage backend for session credentials.
//!
//! Client-side (hydrate): browser `localStorage` via `web-sys`.
//! Server-side and native tests: a process-local in-memory map with the
//! same read-your-writes behavior, so the credential store contract can be
//! exercised without a browser.
//!
//! Failures are explicit at this seam (`StoreError`); the credential store
//! above it decides what to swallow.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use thiserror::Error;

/// Low-level storage failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing storage cannot be reached (disabled localStorage,
    /// sandboxed iframe, no window).
    #[error("storage unavailable")]
    Unavailable,
    /// The write was rejected (quota exceeded or similar).
    #[error("storage write rejected")]
    WriteRejected,
}

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static STORE: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Read a value. `None` covers both "missing" and "storage unavailable".
pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        STORE.with(|s| s.borrow().get(key).cloned())
    }
}

/// Write a value.
///
/// # Errors
///
/// Returns [`StoreError`] when storage is unavailable or rejects the write.
pub fn set(key: &str, value: &str) -> Result<(), StoreError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::WriteRejected)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        STORE.with(|s| {
            s.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
        Ok(())
    }
}

/// Remove a value. Removing a missing key is a no-op.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        STORE.with(|s| {
            s.borrow_mut().remove(key);
        });
    }
}
