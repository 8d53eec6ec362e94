//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` owns the HTTP library, `session_client` classifies responses
//! and raises session events, `api` names the endpoints, and `types` defines
//! the wire schema.

pub mod api;
pub mod session_client;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod scripted;
