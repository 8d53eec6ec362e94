//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Read shapes are lenient
//! (`null` arrays, numeric ids) because profile rows are sparsely populated
//! until a user completes the profile form; write shapes are strict and only
//! ever built from validated form drafts.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// ENUMS
// =============================================================================

/// Account role chosen at registration. Drives profile shape and page access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Alumni,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Student, Role::Alumni];

    /// Wire value (`"STUDENT"` / `"ALUMNI"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Alumni => "ALUMNI",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Alumni => "Alumni",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STUDENT" => Ok(Self::Student),
            "ALUMNI" => Ok(Self::Alumni),
            _ => Err(()),
        }
    }
}

/// Kind of mentorship a student asks for or an alum offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HelpType {
    CoffeeChat,
    ResumeReview,
}

impl HelpType {
    pub const ALL: [HelpType; 2] = [HelpType::CoffeeChat, HelpType::ResumeReview];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CoffeeChat => "COFFEE_CHAT",
            Self::ResumeReview => "RESUME_REVIEW",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CoffeeChat => "Coffee Chat",
            Self::ResumeReview => "Resume Review",
        }
    }
}

impl FromStr for HelpType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COFFEE_CHAT" => Ok(Self::CoffeeChat),
            "RESUME_REVIEW" => Ok(Self::ResumeReview),
            _ => Err(()),
        }
    }
}

/// Lifecycle of a computed match, as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum MatchStatus {
    #[default]
    Pending,
    Matched,
    Accepted,
    Declined,
    /// Any status string this client does not know yet.
    Unknown,
}

impl From<String> for MatchStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PENDING" => Self::Pending,
            "MATCHED" => Self::Matched,
            "ACCEPTED" => Self::Accepted,
            "DECLINED" => Self::Declined,
            _ => Self::Unknown,
        }
    }
}

impl MatchStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Matched => "Matched",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
            Self::Unknown => "In review",
        }
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Common response wrapper used by every backend endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub code: u16,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The authenticated user as returned by `/api/v1/auth/me` and registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Backend user id; numeric ids are normalized to strings.
    #[serde(rename = "userId", deserialize_with = "deserialize_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

/// Stored profile as returned by `/api/v1/profile/me`.
///
/// One shape covers both roles; fields that do not apply to the owner's role
/// are `None` or empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(rename = "userId", deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub grad_year: Option<i32>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub about_me: Option<String>,
    #[serde(default, rename = "resumeS3Key")]
    pub resume_s3_key: Option<String>,
    #[serde(default)]
    pub linkedin_profile: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub career_interests: Vec<String>,
    #[serde(default)]
    pub current_company: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_of_expertise: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub willingness_to_help: Vec<String>,
}

/// The request a match was computed for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequestSummary {
    #[serde(rename = "type")]
    pub kind: HelpType,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Backend-computed pairing shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(default, rename = "matchStatus")]
    pub status: MatchStatus,
    /// The counterpart's profile (the mentor for a student, and vice versa).
    #[serde(default)]
    pub matched_profile: Option<ProfileData>,
    #[serde(default)]
    pub match_request: Option<MatchRequestSummary>,
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Body of `POST /api/v1/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    /// Plain password; the backend hashes it. The key name is fixed by the backend.
    pub password_hash: String,
    pub role: Role,
}

/// Form-encoded body of `POST /api/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password_hash: String,
}

impl LoginRequest {
    /// `application/x-www-form-urlencoded` encoding of the credentials.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("email", &self.email)
            .append_pair("passwordHash", &self.password_hash)
            .finish()
    }
}

/// Body of `POST /api/v1/profile/student`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfilePayload {
    pub grad_year: i32,
    pub major: String,
    pub about_me: String,
    pub career_interest: Vec<String>,
    pub linkedin_profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

/// Body of `POST /api/v1/profile/alumni`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniProfilePayload {
    pub grad_year: i32,
    pub major: String,
    pub about_me: String,
    pub current_company: String,
    pub job_title: String,
    pub field_of_expertise: Vec<String>,
    pub willingness_to_help: Vec<HelpType>,
    pub linkedin_profile: String,
}

/// A validated profile write, tagged by the role it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfilePayload {
    Student(StudentProfilePayload),
    Alumni(AlumniProfilePayload),
}

impl ProfilePayload {
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Alumni(_) => Role::Alumni,
        }
    }
}

/// Body of `POST /api/v1/match-request`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchRequestPayload {
    #[serde(rename = "type")]
    pub kind: HelpType,
    pub message: String,
}

// =============================================================================
// DESERIALIZE HELPERS
// =============================================================================

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
