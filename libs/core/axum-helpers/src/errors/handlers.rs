use axum::response::{IntoResponse, Response};

use super::AppError;

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    AppError::NotFound("The requested resource was not found".to_string()).into_response()
}

/// Handler for 405 Method Not Allowed errors.
///
/// Wire with `Router::method_not_allowed_fallback` so unsupported methods
/// on known routes render the shared envelope.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed("The HTTP method is not allowed for this resource".to_string())
        .into_response()
}
