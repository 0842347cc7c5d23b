use axum::http::HeaderValue;
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attach an `x-request-id` to the request before the trace span opens and
/// echo the same id on the response. A caller-supplied id is preserved so
/// ids correlate across services.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = match req.headers().get(REQUEST_ID_HEADER) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => fresh_request_id(),
    };

    req.headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    let mut response = next.run(req).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);

    response
}

fn fresh_request_id() -> HeaderValue {
    // A hyphenated UUID is always a valid header value; the fallback only
    // guards against a change in the id format.
    HeaderValue::from_str(&Uuid::new_v4().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("-"))
}
