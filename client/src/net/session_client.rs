//! Session-aware API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through `SessionClient::execute`. A 401 from any
//! endpoint is reported on the session event channel before the error is
//! handed back to the caller, so the owner of the auth session (see
//! `app::SessionWatcher`) resets state and redirects regardless of which page
//! issued the call. Pages then see `ApiError::Unauthorized` and stay quiet.
//!
//! ERROR HANDLING
//! ==============
//! Status codes are classified once here; endpoint helpers in `api` only add
//! endpoint-specific recovery (404 on profile fetch, null match data).

#[cfg(test)]
#[path = "session_client_test.rs"]
mod session_client_test;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, BrowserTransport, RawResponse, Transport};
use super::types::Envelope;

/// Client used by the running app.
pub type ApiClient = SessionClient<BrowserTransport>;

/// Cross-cutting notifications from the transport layer to the session owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend answered 401; the session cookie is missing or expired.
    Unauthorized { path: &'static str },
}

/// Failure of a backend call, as seen by pages.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401. Already handled globally by the session watcher.
    #[error("session expired")]
    Unauthorized,

    /// 404.
    #[error("not found")]
    NotFound,

    /// Any other non-2xx status, with the backend's message when it sent one.
    #[error("request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the global 401 path owns this failure and callers must not
    /// run their own error branch.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Message suitable for a top-level notification, or `None` for 401.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> Option<String> {
        match self {
            Self::Unauthorized => None,
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => Some(message.clone()),
            _ => Some(fallback.to_owned()),
        }
    }
}

/// API client that attaches credentials (via its transport) and reports
/// session expiry on a channel.
#[derive(Clone, Debug)]
pub struct SessionClient<T> {
    transport: T,
    events: UnboundedSender<SessionEvent>,
}

impl<T: Transport> SessionClient<T> {
    /// Build a client and the receiving end of its session event channel.
    #[must_use]
    pub fn new(transport: T) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (events, rx) = mpsc::unbounded();
        (Self { transport, events }, rx)
    }

    /// Send one request and classify the outcome.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` after emitting `SessionEvent::Unauthorized`
    /// on 401, `NotFound` on 404, `Rejected` on any other non-2xx status, and
    /// `Network` when the transport fails.
    pub async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let path = request.path;
        log::debug!("{} {path}", request.method.as_str());
        let resp = self.transport.send(request).await.map_err(ApiError::Network)?;
        match resp.status {
            401 => {
                log::warn!("session rejected by backend on {path}");
                self.notify(SessionEvent::Unauthorized { path });
                Err(ApiError::Unauthorized)
            }
            404 => Err(ApiError::NotFound),
            _ if resp.is_success() => Ok(resp),
            status => Err(ApiError::Rejected { status, message: rejection_message(&resp.body) }),
        }
    }

    /// Send a request and decode the `data` field of the response envelope.
    ///
    /// # Errors
    ///
    /// Propagates `execute` errors and returns `Decode` for malformed bodies.
    pub async fn fetch_data<D: DeserializeOwned>(&self, request: ApiRequest) -> Result<Option<D>, ApiError> {
        let resp = self.execute(request).await?;
        decode_data(&resp.body)
    }

    fn notify(&self, event: SessionEvent) {
        // The receiver is gone only after the app has been torn down.
        if self.events.unbounded_send(event).is_err() {
            log::debug!("session event dropped: no listener");
        }
    }
}

/// Decode the `data` field of an envelope body.
///
/// # Errors
///
/// Returns `ApiError::Decode` if the body is not a JSON envelope of `D`.
pub fn decode_data<D: DeserializeOwned>(body: &str) -> Result<Option<D>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Envelope<D>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Backend message from an error body, if the body is an envelope.
fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.trim().is_empty())
}
