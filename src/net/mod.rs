//! Network layer: API client and shared wire types.

pub mod api;
pub mod types;
