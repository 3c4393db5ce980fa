use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Caller-supplied id if usable, otherwise `req-<unix nanos>`.
fn resolve_request_id(req: &Request<Body>) -> HeaderValue {
    if let Some(h) = req.headers().get(REQUEST_ID_HEADER) {
        if h.to_str().is_ok_and(|v| !v.trim().is_empty()) {
            return h.clone();
        }
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    // Only ASCII digits and a prefix, always a valid header value.
    HeaderValue::from_str(&format!("req-{nanos}")).unwrap_or(HeaderValue::from_static("req-0"))
}

/// Makes sure the request and its response carry `X-Request-Id`.
///
/// Handlers read the id from the request headers for their log lines.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Response {
    let id = resolve_request_id(&req);
    req.headers_mut().insert(REQUEST_ID_HEADER, id.clone());

    let mut res = next.run(req).await;
    res.headers_mut().insert(REQUEST_ID_HEADER, id);
    res
}

/// Reads the id stamped by [`request_id`], `-` if absent.
pub fn request_id_of(headers: &HeaderMap) -> &str {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
}
