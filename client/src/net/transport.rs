//! Outbound HTTP seam.
//!
//! Client-side (hydrate): real requests via `gloo-net` with browser cookies
//! attached. Server-side (SSR): a stub that fails every request, since the
//! session cookie only exists in the browser.

#![allow(clippy::unused_async)]

use std::future::Future;

/// Base URL prepended to every API path. Empty means same origin, which is
/// how the bundled server proxies `/api/*` to the backend.
pub const API_BASE_URL: &str = match option_env!("TIGERLINK_API_URL") {
    Some(url) => url,
    None => "",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// Serialized JSON document.
    Json(String),
    /// `application/x-www-form-urlencoded` string.
    Form(String),
}

impl RequestBody {
    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
            Self::Form(_) => Some("application/x-www-form-urlencoded"),
        }
    }
}

/// A single backend call, described independently of the HTTP library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub body: RequestBody,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: &'static str) -> Self {
        Self { method: Method::Get, path, body: RequestBody::Empty }
    }

    #[must_use]
    pub fn post(path: &'static str, body: RequestBody) -> Self {
        Self { method: Method::Post, path, body }
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the backend. Errors are transport-level only (DNS,
/// connection refused, CORS); any HTTP status is a successful exchange.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, String>>;
}

/// `fetch`-backed transport that always sends credentials (the session cookie).
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let url = self.url_for(request.path);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            }
            .credentials(RequestCredentials::Include);
            let builder = match request.body.content_type() {
                Some(content_type) => builder.header("Content-Type", content_type),
                None => builder,
            };
            let prepared = match request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(body) | RequestBody::Form(body) => builder.body(body),
            }
            .map_err(|e| e.to_string())?;

            let resp = prepared.send().await.map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base_url, request);
            Err("not available on server".to_owned())
        }
    }
}
