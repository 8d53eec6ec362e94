//! Mentorship request form rules.

#[cfg(test)]
#[path = "match_request_test.rs"]
mod match_request_test;

use super::{FieldErrors, check_length};
use crate::net::types::{HelpType, MatchRequestPayload};

pub const MIN_MESSAGE_LEN: usize = 20;
pub const MAX_MESSAGE_LEN: usize = 500;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchRequestDraft {
    pub kind: Option<HelpType>,
    pub message: String,
}

impl MatchRequestDraft {
    /// # Errors
    ///
    /// Returns messages keyed by `type` and `message`.
    pub fn validate(&self) -> Result<MatchRequestPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.kind.is_none() {
            errors.add("type", "Select a mentorship type");
        }
        errors.check(
            "message",
            check_length(
                &self.message,
                Some((MIN_MESSAGE_LEN, "Message must be at least 20 characters")),
                Some((MAX_MESSAGE_LEN, "Message must be less than 500 characters")),
            ),
        );
        match self.kind {
            Some(kind) if errors.is_empty() => Ok(MatchRequestPayload { kind, message: self.message.clone() }),
            _ => Err(errors),
        }
    }

    /// Placeholder text for the message box, tailored to the chosen type.
    #[must_use]
    pub fn message_placeholder(&self) -> &'static str {
        match self.kind {
            Some(HelpType::CoffeeChat) => {
                "Introduce yourself and explain what you hope to learn from the coffee chat..."
            }
            Some(HelpType::ResumeReview) => {
                "Describe your career goals and what specific feedback you're looking for..."
            }
            None => "Tell your mentor a little about yourself...",
        }
    }

    /// Character counter shown under the message box.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} / {MAX_MESSAGE_LEN}", self.message.chars().count())
    }
}
