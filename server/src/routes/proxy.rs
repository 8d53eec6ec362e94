//! `/api/*` forwarding to the TigerLink backend.
//!
//! Method, path, query, body and end-to-end headers (cookies included) are
//! replayed upstream; the upstream status, headers (`Set-Cookie` included)
//! and body are replayed back. Nothing is retried.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::Uri;
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;

/// Largest request body buffered before forwarding. Profile and match
/// payloads are a few kilobytes.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Connection-scoped headers (RFC 9110 §7.6.1) that must not be forwarded.
#[must_use]
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "proxy-connection"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Backend URL for an incoming request URI: origin + original path and query.
#[must_use]
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{backend_url}{path}")
}

/// Copy of `source` without hop-by-hop headers. `Host` and `Content-Length`
/// are dropped too; the outgoing side recomputes both.
#[must_use]
pub fn forwardable_headers(source: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(source.len());
    for (name, value) in source {
        if is_hop_by_hop(name) || name == header::HOST || name == header::CONTENT_LENGTH {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// `ANY /api/{*path}`: forward the request and relay the backend response.
///
/// # Errors
///
/// `ProxyError::Body` when the request body exceeds `MAX_BODY_BYTES`,
/// `ProxyError::Upstream` when the backend is unreachable or times out.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = upstream_url(&state.backend_url, &parts.uri);
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
