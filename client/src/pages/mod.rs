//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and submit flow and delegates rendering
//! details to `components`. Access control is applied by the gates around
//! the routes in `app`.

pub mod dashboard;
pub mod login;
pub mod match_request;
pub mod not_found;
pub mod profile;
pub mod register;
