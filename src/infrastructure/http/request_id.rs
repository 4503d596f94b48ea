use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Tags every request with a unique id, visible to handlers through the
/// request headers and echoed back to the caller for log correlation.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().simple().to_string();

    // A simple-format uuid is always a valid header value
    let Ok(value) = HeaderValue::from_str(&request_id) else {
        return next.run(request).await;
    };

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        "Handling request"
    );

    request.headers_mut().insert(X_REQUEST_ID, value.clone());

    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID, value);
    response
}
