//! Page components, one per route.

pub mod home;
pub mod interview;
pub mod login;
pub mod ping;
pub mod register;
