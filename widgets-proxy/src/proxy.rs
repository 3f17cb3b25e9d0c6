use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tracing::warn;
use widgets_core::{CachedResponse, InterceptedRequest, OfflineCache};

pub struct ProxyState {
    /// Origin of the widget render endpoint, without a trailing slash
    pub upstream: String,
    pub interceptor: OfflineCache,
    pub max_body_bytes: usize,
}

/// Headers that only describe a single connection and are never forwarded.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "content-length",
    "host",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Browser validators, stripped so every upstream request is unconditional.
const CONDITIONAL: &[&str] = &[
    "if-match",
    "if-modified-since",
    "if-none-match",
    "if-range",
    "if-unmodified-since",
];

fn is_conditional(name: &str) -> bool {
    CONDITIONAL.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Every path except `/health` goes through the interceptor.
pub fn proxy_router(state: Arc<ProxyState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(intercept)
        .with_state(state)
}

async fn health(State(state): State<Arc<ProxyState>>) -> Response {
    let cache = state.interceptor.cache();
    let entries = cache.len().await;

    let body = serde_json::json!({
        "status": "ok",
        "upstream": state.upstream,
        "cache": cache.name(),
        "entries": entries,
    });

    (
        StatusCode::OK,
        [("content-type", "application/json")],
        body.to_string(),
    )
        .into_response()
}

fn forwarded_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name.as_str()) && !is_conditional(name.as_str()))
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

fn to_response(cached: CachedResponse) -> Response {
    let status = StatusCode::from_u16(cached.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, Body::from(cached.body)).into_response();

    let headers = response.headers_mut();
    for (name, value) in &cached.headers {
        if is_hop_by_hop(name) {
            continue;
        }
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.append(name, value);
            }
            _ => warn!("dropping invalid upstream header {name}"),
        }
    }

    response
}

async fn intercept(State(state): State<Arc<ProxyState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let path = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let body = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return (StatusCode::PAYLOAD_TOO_LARGE, format!("read body: {e}")).into_response();
        }
    };

    let intercepted = InterceptedRequest {
        method: parts.method.as_str().to_string(),
        url: format!("{}{}", state.upstream, path),
        headers: forwarded_headers(&parts.headers),
        body: body.to_vec(),
    };

    match state.interceptor.handle(&intercepted).await {
        Ok(cached) => to_response(cached),
        Err(e) => (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
    }
}
