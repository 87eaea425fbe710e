//! Credential persistence: token + profile in durable browser storage.

pub mod backend;
pub mod credentials;
