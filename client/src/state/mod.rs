//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the single app-wide store. `form` and `notify` are small models
//! that pages hold locally or share through context.

pub mod auth;
pub mod form;
pub mod notify;
