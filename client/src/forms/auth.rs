//! Registration and login form rules.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::{FieldErrors, INSTITUTION_EMAIL_SUFFIX, MSG_INVALID_EMAIL, check_length, is_valid_email};
use crate::net::types::{LoginRequest, RegistrationRequest, Role};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl RegistrationDraft {
    /// Validate every field and build the registration request.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field (`fullName`, `email`, `password`, `role`).
    pub fn validate(&self) -> Result<RegistrationRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "fullName",
            check_length(&self.full_name, Some((2, "Full name must be at least 2 characters")), None),
        );
        errors.check("email", check_institution_email(&self.email));
        errors.check("password", check_password(&self.password));
        if self.role.is_none() {
            errors.add("role", "Please select whether you are a student or alumni");
        }

        let Some(role) = self.role else {
            return Err(errors);
        };
        errors.into_result(|| RegistrationRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password_hash: self.password.clone(),
            role,
        })
    }
}

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    /// Validate and build the login request.
    ///
    /// # Errors
    ///
    /// Returns messages for `email` and `password`.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        if !is_valid_email(&self.email) {
            errors.add("email", MSG_INVALID_EMAIL);
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result(|| LoginRequest { email: self.email.clone(), password_hash: self.password.clone() })
    }
}

/// Institutional suffix first, so every off-domain address gets the
/// domain-specific message, then general syntax.
///
/// # Errors
///
/// Returns the field message on failure.
pub fn check_institution_email(email: &str) -> Result<(), String> {
    if !email.ends_with(INSTITUTION_EMAIL_SUFFIX) {
        return Err(format!("Must be a valid {INSTITUTION_EMAIL_SUFFIX} email"));
    }
    if !is_valid_email(email) {
        return Err(MSG_INVALID_EMAIL.to_owned());
    }
    Ok(())
}

/// At least 8 characters, ASCII letters and digits only, with at least one of each.
///
/// # Errors
///
/// Returns the field message on failure.
pub fn check_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let alphanumeric = password.chars().all(|c| c.is_ascii_alphanumeric());
    if !(has_letter && has_digit && alphanumeric) {
        return Err("Password must contain at least one letter and one number".to_owned());
    }
    Ok(())
}
