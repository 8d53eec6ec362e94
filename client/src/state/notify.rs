//! Top-level notifications (toasts).
//!
//! SYSTEM CONTEXT
//! ==============
//! Backend rejections surface here rather than as field errors. 401s never
//! produce a notice; the session watcher owns that path.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::net::session_client::ApiError;

/// Oldest notices are dropped beyond this many.
pub const MAX_VISIBLE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Assigned by `Notices::push`.
    pub id: u64,
    pub tone: Tone,
    pub title: String,
    pub description: String,
}

impl Notice {
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: 0, tone: Tone::Success, title: title.into(), description: description.into() }
    }

    #[must_use]
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: 0, tone: Tone::Error, title: title.into(), description: description.into() }
    }
}

/// Visible notices, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notices {
    items: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Queue a notice and return its id.
    pub fn push(&mut self, mut notice: Notice) -> u64 {
        self.next_id += 1;
        notice.id = self.next_id;
        self.items.push(notice);
        if self.items.len() > MAX_VISIBLE {
            let excess = self.items.len() - MAX_VISIBLE;
            self.items.drain(..excess);
        }
        self.next_id
    }

    /// Remove a notice; false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|notice| notice.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Error notice for a failed call, or `None` when the session watcher owns it.
#[must_use]
pub fn error_notice(error: &ApiError, title: &str, fallback: &str) -> Option<Notice> {
    error.user_message(fallback).map(|description| Notice::error(title, description))
}

/// Push onto the shared queue; a no-op once the app has been torn down.
pub fn notify(notices: RwSignal<Notices>, notice: Notice) {
    notices.try_update(|queue| queue.push(notice));
}
