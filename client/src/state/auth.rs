//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route gates, the role guard and identity-aware pages to coordinate
//! login redirects and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! `AuthSession` is the only writer. Pages and components receive it from
//! context and read through its accessors; the underlying signal is private.
//! Writes go through `try_*` so a request that completes after the owning
//! scope has been disposed is dropped silently.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::session_client::{ApiError, SessionClient, SessionEvent};
use crate::net::transport::Transport;
use crate::net::types::{Identity, Role};
use crate::util::auth::apply_session_event;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only until the first identity query settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Settled state with a known user.
    #[must_use]
    pub fn signed_in(user: Identity) -> Self {
        Self { user: Some(user), loading: false }
    }

    /// Settled state with no user.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    /// Apply the outcome of an identity query.
    pub fn resolve(&mut self, outcome: Result<Identity, ApiError>) {
        match outcome {
            Ok(user) => *self = Self::signed_in(user),
            Err(e) => {
                if !e.is_session_expired() {
                    log::warn!("identity query failed: {e}");
                }
                self.clear();
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::signed_out();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Shared handle to the session, provided through context by `App`.
#[derive(Clone, Copy, Debug)]
pub struct AuthSession {
    state: RwSignal<AuthState>,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    /// New session in the initial loading state.
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Read-only view for gates and effects.
    #[must_use]
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|state| state.user.clone())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.state.with(AuthState::role)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.with(|state| state.loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    /// Run the who-am-I query (on startup and after login) and settle the
    /// session with its outcome.
    ///
    /// # Errors
    ///
    /// Returns the query failure after the session has been cleared.
    pub async fn refresh<T: Transport>(self, client: &SessionClient<T>) -> Result<Identity, ApiError> {
        let outcome = client.me().await;
        self.state.try_update(|state| state.resolve(outcome.clone()));
        outcome
    }

    /// Tell the backend to drop the session, then clear local state.
    ///
    /// Local state is cleared even when the backend call fails.
    ///
    /// # Errors
    ///
    /// Returns the backend failure after clearing.
    pub async fn logout<T: Transport>(self, client: &SessionClient<T>) -> Result<(), ApiError> {
        let result = client.logout().await;
        if let Err(e) = &result {
            log::warn!("logout request failed: {e}");
        }
        self.invalidate();
        result
    }

    /// Drop the identity without contacting the backend.
    pub fn invalidate(self) {
        self.state.try_update(AuthState::clear);
    }

    /// Apply an event from the API client's session channel. Returns true
    /// when the session changed; false for repeats or after disposal.
    pub fn apply(self, event: &SessionEvent) -> bool {
        self.state.try_update(|state| apply_session_event(state, event)).unwrap_or(false)
    }
}
