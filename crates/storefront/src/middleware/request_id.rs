//! Request ID middleware for log and error correlation.
//!
//! Reuses an `x-request-id` supplied by an upstream proxy, otherwise mints a
//! UUID v4. The ID is recorded on the current span, tagged on the Sentry
//! scope, and echoed in the response headers.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID accepted as-is; anything longer is replaced.
const MAX_UPSTREAM_ID_LEN: usize = 128;

fn upstream_request_id(request: &Request) -> Option<String> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_UPSTREAM_ID_LEN)
        .map(String::from)
}

/// Middleware that gives every request an ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = upstream_request_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;

    use super::*;

    #[test]
    fn test_upstream_request_id_is_reused() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, " abc-123 ")
            .body(Body::empty())
            .unwrap();
        assert_eq!(upstream_request_id(&request).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_missing_or_oversized_request_id_is_ignored() {
        let missing = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(upstream_request_id(&missing), None);

        let oversized = Request::builder()
            .header(REQUEST_ID_HEADER, "x".repeat(MAX_UPSTREAM_ID_LEN + 1))
            .body(Body::empty())
            .unwrap();
        assert_eq!(upstream_request_id(&oversized), None);
    }
}
