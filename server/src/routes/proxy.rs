//! Same-origin forwarding of `/api/*` to the banking backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server. Every `/api/{path}` request is
//! replayed against `{BANK_API_URL}/{path}` with the same method, query, body
//! and end-to-end headers, and the backend's status, headers and body are
//! returned unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Backend error statuses pass through untouched so the client can show the
//! backend's own `message`. Only transport failures are answered here, with
//! `502 {"message": "backend unavailable"}`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::header::{CONNECTION, CONTENT_LENGTH, HOST};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use bank_types::MessageResponse;
use tracing::Instrument;
use uuid::Uuid;

use crate::state::AppState;

pub const REQUEST_ID: &str = "x-request-id";
pub const BACKEND_UNAVAILABLE: &str = "backend unavailable";

const API_PREFIX: &str = "/api";
const MAX_BODY_BYTES: usize = 1024 * 1024;
const MAX_REQUEST_ID_LEN: usize = 128;

/// Hop-by-hop headers (RFC 9110 section 7.6.1) never forwarded in either direction.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy the end-to-end headers of `headers`.
///
/// Drops hop-by-hop headers, anything named in `Connection`, and `Host` and
/// `Content-Length`, which the outgoing client recomputes.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    headers
        .iter()
        .filter(|(name, _)| {
            !is_hop_by_hop(name)
                && **name != HOST
                && **name != CONTENT_LENGTH
                && !listed.iter().any(|token| token == name.as_str())
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Backend URL for a forwarded `path` and optional raw query string.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = bank_types::endpoints::join(base, path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Still-encoded remainder of `uri_path` after the `/api` mount.
pub fn forwarded_path(uri_path: &str) -> &str {
    uri_path.strip_prefix(API_PREFIX).unwrap_or(uri_path).trim_start_matches('/')
}

/// Reuse a caller-supplied request id if it is sane, otherwise mint one.
pub fn request_id(headers: &HeaderMap) -> HeaderValue {
    headers
        .get(REQUEST_ID)
        .filter(|value| !value.is_empty() && value.len() <= MAX_REQUEST_ID_LEN && value.to_str().is_ok())
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap_or_else(|_| HeaderValue::from_static("-"))
        })
}

fn message(status: StatusCode, text: &str, request_id: HeaderValue) -> Response {
    let mut response = (status, Json(MessageResponse { message: text.to_owned() })).into_response();
    response.headers_mut().insert(REQUEST_ID, request_id);
    response
}

/// `ANY /api/{*path}`.
///
/// The path is taken from the raw URI rather than the decoded `{*path}`
/// capture so escaped `/` and `?` reach the backend unchanged.
pub async fn forward(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let request_id = request_id(&parts.headers);
    let path = forwarded_path(parts.uri.path()).to_owned();
    let url = upstream_url(&state.upstream, &path, parts.uri.query());
    let span = tracing::info_span!(
        "proxy",
        method = %parts.method,
        path = %path,
        request_id = request_id.to_str().unwrap_or("-")
    );

    async move {
        let body: Bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "rejecting request body");
                return message(StatusCode::PAYLOAD_TOO_LARGE, "request body too large", request_id);
            }
        };

        let mut headers = forwardable_headers(&parts.headers);
        headers.insert(REQUEST_ID, request_id.clone());

        let upstream = match state
            .http
            .request(parts.method, &url)
            .headers(headers)
            .body(body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, %url, "backend request failed");
                return message(StatusCode::BAD_GATEWAY, BACKEND_UNAVAILABLE, request_id);
            }
        };

        let status = upstream.status();
        let mut headers = forwardable_headers(upstream.headers());
        let body = match upstream.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, %url, "backend response interrupted");
                return message(StatusCode::BAD_GATEWAY, BACKEND_UNAVAILABLE, request_id);
            }
        };
        headers.insert(REQUEST_ID, request_id);

        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), "backend error");
        } else {
            tracing::debug!(status = status.as_u16(), bytes = body.len(), "proxied");
        }
        (status, headers, body).into_response()
    }
    .instrument(span)
    .await
}
