//! Role-specific profile form rules.
//!
//! DESIGN
//! ======
//! Students and alumni fill different forms. `ProfileDraft` is selected by
//! the signed-in `Role` and validates into the matching `ProfilePayload`
//! variant, so the page never branches on field presence.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::{FieldErrors, MSG_INVALID_URL, check_length, dedup_preserving_order, is_valid_url};
use crate::net::types::{AlumniProfilePayload, HelpType, ProfileData, ProfilePayload, Role, StudentProfilePayload};

pub const MIN_GRAD_YEAR: i32 = 1900;
pub const MAX_GRAD_YEAR: i32 = 2100;

pub const CAREER_INTERESTS: [&str; 8] = [
    "Technology",
    "Software Engineering",
    "Finance",
    "Consulting",
    "Healthcare",
    "Education",
    "Marketing",
    "Law",
];

pub const EXPERTISE_FIELDS: [&str; 8] = [
    "Software Development",
    "Data Science",
    "Finance",
    "Investment Banking",
    "Consulting",
    "Product Management",
    "Marketing",
    "Sales",
];

/// Fields shared by both profile forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommonProfileFields {
    /// Raw text; parsed as a whole number on validation.
    pub grad_year: String,
    pub major: String,
    pub about_me: String,
    pub linkedin_profile: String,
}

impl CommonProfileFields {
    fn from_profile(profile: &ProfileData) -> Self {
        Self {
            grad_year: profile.grad_year.map(|year| year.to_string()).unwrap_or_default(),
            major: profile.major.clone().unwrap_or_default(),
            about_me: profile.about_me.clone().unwrap_or_default(),
            linkedin_profile: profile.linkedin_profile.clone().unwrap_or_default(),
        }
    }

    /// Check the shared fields into `errors`; yields the parsed year when it is valid.
    fn validate(&self, errors: &mut FieldErrors) -> Option<i32> {
        let year = match parse_grad_year(&self.grad_year) {
            Ok(year) => Some(year),
            Err(message) => {
                errors.add("gradYear", message);
                None
            }
        };
        errors.check(
            "major",
            check_length(
                &self.major,
                Some((2, "Major must be at least 2 characters")),
                Some((100, "Major must be at most 100 characters")),
            ),
        );
        errors.check(
            "aboutMe",
            check_length(&self.about_me, None, Some((200, "About me must be less than 200 characters"))),
        );
        if !is_valid_url(&self.linkedin_profile) {
            errors.add("linkedinProfile", MSG_INVALID_URL);
        }
        year
    }
}

/// Raw student profile form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentProfileDraft {
    pub common: CommonProfileFields,
    pub career_interests: Vec<String>,
    /// Empty string means "no resume".
    pub resume_url: String,
}

impl StudentProfileDraft {
    #[must_use]
    pub fn from_profile(profile: &ProfileData) -> Self {
        Self {
            common: CommonProfileFields::from_profile(profile),
            career_interests: profile.career_interests.clone(),
            resume_url: profile.resume_s3_key.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// Returns messages keyed by `gradYear`, `major`, `aboutMe`,
    /// `careerInterests`, `linkedinProfile`, `resumeUrl`.
    pub fn validate(&self) -> Result<StudentProfilePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let year = self.common.validate(&mut errors);
        if self.career_interests.is_empty() {
            errors.add("careerInterests", "Select at least one career interest");
        }
        let resume_url = optional_url(&self.resume_url);
        if let Err(message) = &resume_url {
            errors.add("resumeUrl", message.clone());
        }

        match (year, resume_url) {
            (Some(grad_year), Ok(resume_url)) if errors.is_empty() => Ok(StudentProfilePayload {
                grad_year,
                major: self.common.major.clone(),
                about_me: self.common.about_me.clone(),
                career_interest: dedup_preserving_order(&self.career_interests),
                linkedin_profile: self.common.linkedin_profile.clone(),
                resume_url,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw alumni profile form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlumniProfileDraft {
    pub common: CommonProfileFields,
    pub current_company: String,
    pub job_title: String,
    pub fields_of_expertise: Vec<String>,
    pub willingness_to_help: Vec<HelpType>,
}

impl AlumniProfileDraft {
    /// Prefill from a stored profile; unknown help types are dropped.
    #[must_use]
    pub fn from_profile(profile: &ProfileData) -> Self {
        Self {
            common: CommonProfileFields::from_profile(profile),
            current_company: profile.current_company.clone().unwrap_or_default(),
            job_title: profile.job_title.clone().unwrap_or_default(),
            fields_of_expertise: profile.field_of_expertise.clone(),
            willingness_to_help: profile
                .willingness_to_help
                .iter()
                .filter_map(|raw| raw.parse().ok())
                .collect(),
        }
    }

    /// # Errors
    ///
    /// Returns messages keyed by the common fields plus `currentCompany`,
    /// `jobTitle`, `fieldsOfExpertise`, `willingnessToHelp`.
    pub fn validate(&self) -> Result<AlumniProfilePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let year = self.common.validate(&mut errors);
        errors.check(
            "currentCompany",
            check_length(
                &self.current_company,
                Some((1, "Company name is required")),
                Some((100, "Company name must be at most 100 characters")),
            ),
        );
        errors.check(
            "jobTitle",
            check_length(
                &self.job_title,
                Some((1, "Job title is required")),
                Some((100, "Job title must be at most 100 characters")),
            ),
        );
        if self.fields_of_expertise.is_empty() {
            errors.add("fieldsOfExpertise", "Select at least one field of expertise");
        }
        if self.willingness_to_help.is_empty() {
            errors.add("willingnessToHelp", "Select at least one mentorship type");
        }

        match year {
            Some(grad_year) if errors.is_empty() => Ok(AlumniProfilePayload {
                grad_year,
                major: self.common.major.clone(),
                about_me: self.common.about_me.clone(),
                current_company: self.current_company.clone(),
                job_title: self.job_title.clone(),
                field_of_expertise: dedup_preserving_order(&self.fields_of_expertise),
                willingness_to_help: dedup_preserving_order(&self.willingness_to_help),
                linkedin_profile: self.common.linkedin_profile.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Profile draft for whichever role is signed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileDraft {
    Student(StudentProfileDraft),
    Alumni(AlumniProfileDraft),
}

impl ProfileDraft {
    /// Empty draft for `role`.
    #[must_use]
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Student => Self::Student(StudentProfileDraft::default()),
            Role::Alumni => Self::Alumni(AlumniProfileDraft::default()),
        }
    }

    /// Draft for `role`, prefilled from a stored profile when one exists.
    #[must_use]
    pub fn for_role(role: Role, existing: Option<&ProfileData>) -> Self {
        match (role, existing) {
            (Role::Student, Some(profile)) => Self::Student(StudentProfileDraft::from_profile(profile)),
            (Role::Alumni, Some(profile)) => Self::Alumni(AlumniProfileDraft::from_profile(profile)),
            (role, None) => Self::empty(role),
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Alumni(_) => Role::Alumni,
        }
    }

    #[must_use]
    pub fn common(&self) -> &CommonProfileFields {
        match self {
            Self::Student(draft) => &draft.common,
            Self::Alumni(draft) => &draft.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut CommonProfileFields {
        match self {
            Self::Student(draft) => &mut draft.common,
            Self::Alumni(draft) => &mut draft.common,
        }
    }

    #[must_use]
    pub fn as_student(&self) -> Option<&StudentProfileDraft> {
        match self {
            Self::Student(draft) => Some(draft),
            Self::Alumni(_) => None,
        }
    }

    pub fn as_student_mut(&mut self) -> Option<&mut StudentProfileDraft> {
        match self {
            Self::Student(draft) => Some(draft),
            Self::Alumni(_) => None,
        }
    }

    #[must_use]
    pub fn as_alumni(&self) -> Option<&AlumniProfileDraft> {
        match self {
            Self::Alumni(draft) => Some(draft),
            Self::Student(_) => None,
        }
    }

    pub fn as_alumni_mut(&mut self) -> Option<&mut AlumniProfileDraft> {
        match self {
            Self::Alumni(draft) => Some(draft),
            Self::Student(_) => None,
        }
    }

    /// # Errors
    ///
    /// Returns the role-specific field errors.
    pub fn validate(&self) -> Result<ProfilePayload, FieldErrors> {
        match self {
            Self::Student(draft) => draft.validate().map(ProfilePayload::Student),
            Self::Alumni(draft) => draft.validate().map(ProfilePayload::Alumni),
        }
    }
}

/// Parse a graduation year the way a numeric input coerces: blank is 0.
///
/// # Errors
///
/// Returns the field message for non-numbers, fractions, and out-of-range years.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_grad_year(raw: &str) -> Result<i32, String> {
    let trimmed = raw.trim();
    let value: f64 = if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse().map_err(|_| "Graduation year must be a number".to_owned())?
    };
    if !value.is_finite() {
        return Err("Graduation year must be a number".to_owned());
    }
    if value.fract() != 0.0 {
        return Err("Graduation year must be a whole number".to_owned());
    }
    if value < f64::from(MIN_GRAD_YEAR) || value > f64::from(MAX_GRAD_YEAR) {
        return Err("Invalid graduation year".to_owned());
    }
    Ok(value as i32)
}

/// Empty means absent; anything else must be a URL.
fn optional_url(raw: &str) -> Result<Option<String>, String> {
    if raw.is_empty() {
        Ok(None)
    } else if is_valid_url(raw) {
        Ok(Some(raw.to_owned()))
    } else {
        Err(MSG_INVALID_URL.to_owned())
    }
}
