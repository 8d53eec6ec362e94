//! Client-side validation for the app's input forms.
//!
//! DESIGN
//! ======
//! Each form keeps a *draft* of raw input strings. `validate()` turns a draft
//! into the typed request the backend expects, or returns `FieldErrors` with
//! one human-readable message per failing field. No network access happens
//! here; the backend re-validates on submit.

pub mod auth;
pub mod match_request;
pub mod profile;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::sync::LazyLock;

use regex::Regex;

/// Registration is restricted to institutional addresses.
pub const INSTITUTION_EMAIL_SUFFIX: &str = "@depauw.edu";

pub const MSG_INVALID_EMAIL: &str = "Invalid email address";
pub const MSG_INVALID_URL: &str = "Must be a valid URL";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Validation failures keyed by form field, in the order fields were checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. Only the first message per field is kept.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    /// Record the error from a field check, if any.
    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// `Ok(value)` if nothing failed, otherwise these errors.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

// =============================================================================
// SHARED FIELD RULES
// =============================================================================

/// Syntactic email check: local part, `@`, dotted domain with alphabetic TLD.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Absolute URL with a scheme, as a browser `URL` constructor would accept.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Length in characters, not bytes.
#[must_use]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Check `min <= len <= max` (either bound optional).
///
/// # Errors
///
/// Returns the matching message when a bound is violated.
pub fn check_length(value: &str, min: Option<(usize, &str)>, max: Option<(usize, &str)>) -> Result<(), String> {
    let len = char_len(value);
    if let Some((min, message)) = min {
        if len < min {
            return Err(message.to_owned());
        }
    }
    if let Some((max, message)) = max {
        if len > max {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

/// Remove duplicates, keeping the first occurrence of each value.
#[must_use]
pub fn dedup_preserving_order<T: PartialEq + Clone>(values: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}
