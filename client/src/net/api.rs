//! Backend endpoint operations.
//!
//! Thin wrappers over `SessionClient` that fix each endpoint's path, method
//! and body encoding. Status handling (including the global 401 path) lives
//! in `session_client`; only endpoint-specific recovery happens here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::session_client::{ApiError, SessionClient};
use super::transport::{ApiRequest, RequestBody, Transport};
use super::types::{Identity, LoginRequest, MatchRequestPayload, MatchResult, ProfileData, ProfilePayload, RegistrationRequest};

pub const REGISTER_PATH: &str = "/api/v1/auth/register";
pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const LOGOUT_PATH: &str = "/api/v1/logout";
pub const ME_PATH: &str = "/api/v1/auth/me";
pub const PROFILE_PATH: &str = "/api/v1/profile/me";
pub const STUDENT_PROFILE_PATH: &str = "/api/v1/profile/student";
pub const ALUMNI_PROFILE_PATH: &str = "/api/v1/profile/alumni";
pub const MATCH_REQUEST_PATH: &str = "/api/v1/match-request";
pub const MATCH_RESULT_PATH: &str = "/api/v1/match/match-result";

fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl<T: Transport> SessionClient<T> {
    /// Create an account via `POST /api/v1/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError`; a 2xx without identity data is `Decode`.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<Identity, ApiError> {
        let identity = self.fetch_data(ApiRequest::post(REGISTER_PATH, json_body(request)?)).await?;
        identity.ok_or_else(|| ApiError::Decode("registration returned no identity".to_owned()))
    }

    /// Open a session via form-encoded `POST /api/v1/auth/login`.
    ///
    /// The response body is ignored; callers re-query `me` for the identity.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError`.
    pub async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        self.execute(ApiRequest::post(LOGIN_PATH, RequestBody::Form(request.to_form_body())))
            .await
            .map(drop)
    }

    /// Invalidate the session cookie via `POST /api/v1/logout`.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError`.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute(ApiRequest::post(LOGOUT_PATH, RequestBody::Empty)).await.map(drop)
    }

    /// Fetch the authenticated identity via `GET /api/v1/auth/me`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when there is no session; `Decode` when data is missing.
    pub async fn me(&self) -> Result<Identity, ApiError> {
        self.fetch_data(ApiRequest::get(ME_PATH))
            .await?
            .ok_or_else(|| ApiError::Decode("identity missing from response".to_owned()))
    }

    /// Fetch the caller's profile. `Ok(None)` means no profile exists yet.
    ///
    /// # Errors
    ///
    /// Any classified error other than 404.
    pub async fn fetch_my_profile(&self) -> Result<Option<ProfileData>, ApiError> {
        match self.fetch_data(ApiRequest::get(PROFILE_PATH)).await {
            Err(ApiError::NotFound) => Ok(None),
            other => other,
        }
    }

    /// Create or update the caller's profile on the endpoint for its role.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError`.
    pub async fn save_profile(&self, payload: &ProfilePayload) -> Result<(), ApiError> {
        let request = match payload {
            ProfilePayload::Student(student) => ApiRequest::post(STUDENT_PROFILE_PATH, json_body(student)?),
            ProfilePayload::Alumni(alumni) => ApiRequest::post(ALUMNI_PROFILE_PATH, json_body(alumni)?),
        };
        self.execute(request).await.map(drop)
    }

    /// Submit a mentorship request via `POST /api/v1/match-request`.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError`.
    pub async fn create_match_request(&self, payload: &MatchRequestPayload) -> Result<(), ApiError> {
        self.execute(ApiRequest::post(MATCH_REQUEST_PATH, json_body(payload)?)).await.map(drop)
    }

    /// Fetch the current match. `Ok(None)` means no match has been made yet.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError`.
    pub async fn fetch_match_result(&self) -> Result<Option<MatchResult>, ApiError> {
        self.fetch_data(ApiRequest::get(MATCH_RESULT_PATH)).await
    }
}
