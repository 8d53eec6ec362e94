//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, toasts), form building blocks and
//! the auth gates, reading shared state from Leptos context providers.

pub mod app_header;
pub mod form_field;
pub mod gate;
pub mod multi_select;
pub mod toast;
