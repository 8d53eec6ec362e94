//! Per-form submit lifecycle.
//!
//! Each page owns one `SubmitPhase` signal per form. The trigger control is
//! disabled while the phase is busy so one form never has two submissions in
//! flight.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Local rules are being checked; no request sent yet.
    Validating,
    /// Request in flight.
    Submitting,
    /// Request accepted; the page is about to navigate away.
    Succeeded,
    /// Validation or the request failed; the form stays editable.
    Failed,
}

impl SubmitPhase {
    /// Whether a new submission may start.
    #[must_use]
    pub fn can_submit(self) -> bool {
        matches!(self, Self::Idle | Self::Failed)
    }

    /// Trigger label: `busy` from submit until the page leaves, `idle` otherwise.
    #[must_use]
    pub fn button_label(self, idle: &'static str, busy: &'static str) -> &'static str {
        if self.can_submit() { idle } else { busy }
    }

    /// Phase after local validation.
    #[must_use]
    pub fn after_validation(valid: bool) -> Self {
        if valid { Self::Submitting } else { Self::Failed }
    }

    /// Phase after the request settles.
    #[must_use]
    pub fn after_request<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() { Self::Succeeded } else { Self::Failed }
    }
}

/// Record a request outcome on the form's phase signal.
///
/// Returns false when the form was unmounted while the request was in
/// flight; the caller must then skip its completion handling.
pub fn settle<T, E>(phase: RwSignal<SubmitPhase>, result: &Result<T, E>) -> bool {
    phase.try_set(SubmitPhase::after_request(result)).is_none()
}
