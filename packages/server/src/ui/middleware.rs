//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};

/// Build the `[METHOD] /path?query` line logged for each request.
///
/// The query string is kept on purpose so the line shows the request target
/// exactly as the client sent it, not just the route path.
pub fn request_line(request: &Request) -> String {
    let method = request.method().as_str().to_uppercase();
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| request.uri().path());
    format!("[{method}] {path}")
}

/// Log method and path of every incoming request.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!("{}", request_line(&request));
    next.run(request).await
}
