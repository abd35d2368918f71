//! `/api/*` pass-through to the external mail/AI backend.
//!
//! The browser calls same-origin `/api/...`; this handler replays the request
//! against `BACKEND_URL` with the same method, path, query, and body. Only the
//! headers the API needs are forwarded. Upstream failures become 502 with a
//! `{ "message": ... }` body the client already knows how to display.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

static FORWARDED_HEADERS: [HeaderName; 3] = [ACCEPT, AUTHORIZATION, CONTENT_TYPE];

/// Upstream URL for an incoming request URI.
pub(crate) fn target_url(base_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base_url.trim_end_matches('/'))
}

/// The subset of request headers replayed upstream.
pub(crate) fn forwarded_headers(headers: &HeaderMap) -> Vec<(HeaderName, HeaderValue)> {
    FORWARDED_HEADERS
        .iter()
        .filter_map(|name| headers.get(name).map(|value| (name.clone(), value.clone())))
        .collect()
}

fn bad_gateway(message: &str) -> Response {
    (StatusCode::BAD_GATEWAY, Json(json!({ "message": message }))).into_response()
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(backend) = state.backend.as_ref() else {
        tracing::debug!(%uri, "api pass-through not configured");
        return bad_gateway("API backend is not configured.");
    };

    let url = target_url(&backend.base_url, &uri);
    let mut request = backend.http.request(method.clone(), &url).body(body);
    for (name, value) in forwarded_headers(&headers) {
        request = request.header(name, value);
    }

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "api backend unreachable");
            return bad_gateway("API backend is unreachable.");
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "api backend response truncated");
            return bad_gateway("API backend response was incomplete.");
        }
    };
    tracing::debug!(%method, %url, status = status.as_u16(), bytes = bytes.len(), "api pass-through");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}
