//! Route gate and role guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical redirect behavior. The decisions are
//! pure functions of `AuthState`; `components::gate` turns them into
//! navigation and placeholder rendering.
//!
//! No decision is made while the session is still loading, so a slow identity
//! query never bounces a signed-in user to `/login`.
//!
//! A 401 from any endpoint only clears the session (`apply_session_event`).
//! The protected route gate then owns the single navigation to `/login`;
//! public-only pages stay where they are.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::session_client::SessionEvent;
use crate::net::types::Role;
use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Signed-in users only (dashboard, profile, match request).
    Protected,
    /// Signed-out users only (login, register).
    PublicOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still loading; show a placeholder and do nothing else.
    Pending,
    Render,
    Redirect(&'static str),
}

/// Decide what a route gate does for the given session.
#[must_use]
pub fn route_gate(state: &AuthState, access: RouteAccess) -> GateDecision {
    if state.loading {
        return GateDecision::Pending;
    }
    match (access, state.is_authenticated()) {
        (RouteAccess::Protected, true) | (RouteAccess::PublicOnly, false) => GateDecision::Render,
        (RouteAccess::Protected, false) => GateDecision::Redirect(LOGIN_PATH),
        (RouteAccess::PublicOnly, true) => GateDecision::Redirect(DASHBOARD_PATH),
    }
}

/// Decide whether a role-restricted view may render.
///
/// Without a known identity this stays `Pending`; the enclosing route gate
/// owns the signed-out redirect.
#[must_use]
pub fn role_guard(state: &AuthState, required: Role) -> GateDecision {
    if state.loading {
        return GateDecision::Pending;
    }
    match state.role() {
        None => GateDecision::Pending,
        Some(role) if role == required => GateDecision::Render,
        Some(_) => GateDecision::Redirect(DASHBOARD_PATH),
    }
}

/// Apply a session event from the API client. Returns true when the
/// state changed; repeated 401s after the first are no-ops.
pub fn apply_session_event(state: &mut AuthState, event: &SessionEvent) -> bool {
    match event {
        SessionEvent::Unauthorized { .. } => {
            let changed = *state != AuthState::signed_out();
            state.clear();
            changed
        }
    }
}

/// Lets a gate instance navigate at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    /// Target to navigate to for `decision`, if this gate has not navigated
    /// yet and the browser is not already there.
    pub fn take(&mut self, decision: GateDecision, current_path: &str) -> Option<&'static str> {
        match decision {
            GateDecision::Redirect(target) if !self.fired => {
                self.fired = true;
                (target != current_path).then_some(target)
            }
            _ => None,
        }
    }
}
