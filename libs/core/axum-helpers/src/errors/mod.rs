pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::{Request, rejection::JsonRejection},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response envelope.
///
/// Every error response carries the same shape so clients can parse failures
/// uniformly:
/// - `timestamp`: when the error response was built
/// - `status`: numeric HTTP status code
/// - `error`: short human-readable error label (e.g., "Not Found")
/// - `message`: detailed error message
/// - `path`: the request path that produced the error
///
/// # JSON Example
///
/// ```json
/// {
///   "timestamp": "2026-08-24T10:15:30Z",
///   "status": 404,
///   "error": "Not Found",
///   "message": "User not found: 42",
///   "path": "/api/v1/users/42"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// When this error response was constructed
    pub timestamp: DateTime<Utc>,
    /// Numeric HTTP status code
    pub status: u16,
    /// Short error label
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Request path that produced the error
    pub path: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: &str, message: String, path: String) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: error.to_string(),
            message,
            path,
        }
    }
}

/// Error metadata attached to a response so the envelope middleware can stamp
/// the originating request path into the body.
#[derive(Clone)]
pub struct ErrorContext {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this enum at the boundary; `IntoResponse`
/// renders the shared [`ErrorResponse`] envelope.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Method Not Allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    fn context(self) -> ErrorContext {
        match self {
            AppError::SerdeJson(e) => {
                tracing::error!("JSON parsing error: {:?}", e);
                ErrorContext {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: "Internal Server Error",
                    message: "Failed to serialize response".to_string(),
                }
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                ErrorContext {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: "Internal Server Error",
                    message: "An internal I/O error occurred".to_string(),
                }
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                ErrorContext {
                    status: e.status(),
                    error: "Bad Request",
                    message: e.body_text(),
                }
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                ErrorContext {
                    status: StatusCode::BAD_REQUEST,
                    error: "Validation Error",
                    message: msg,
                }
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                ErrorContext {
                    status: StatusCode::NOT_FOUND,
                    error: "Not Found",
                    message: msg,
                }
            }
            AppError::MethodNotAllowed(msg) => {
                tracing::info!("Method not allowed: {}", msg);
                ErrorContext {
                    status: StatusCode::METHOD_NOT_ALLOWED,
                    error: "Method Not Allowed",
                    message: msg,
                }
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                ErrorContext {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: "Internal Server Error",
                    message: msg,
                }
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                ErrorContext {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    error: "Service Unavailable",
                    message: msg,
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let ctx = self.context();

        // The path is only known to the envelope middleware; render an empty
        // path here so the body is complete even without the middleware
        // (e.g., when a domain router is tested in isolation).
        let body = Json(ErrorResponse::new(
            ctx.status,
            ctx.error,
            ctx.message.clone(),
            String::new(),
        ));

        let mut response = (ctx.status, body).into_response();
        response.extensions_mut().insert(ctx);
        response
    }
}

/// Middleware that stamps the originating request path into error envelopes.
///
/// Handlers build the envelope without knowing the request path; this layer
/// rebuilds the body with the path filled in whenever a response carries an
/// [`ErrorContext`] extension.
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ErrorContext>() {
        Some(ctx) => {
            let body = Json(ErrorResponse::new(ctx.status, ctx.error, ctx.message, path));
            (ctx.status, body).into_response()
        }
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            "User not found: 42".to_string(),
            "/api/v1/users/42".to_string(),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "User not found: 42");
        assert_eq!(json["path"], "/api/v1/users/42");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_app_error_carries_context_extension() {
        let response = AppError::BadRequest("name: required".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let ctx = response.extensions().get::<ErrorContext>().unwrap();
        assert_eq!(ctx.error, "Validation Error");
        assert_eq!(ctx.message, "name: required");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("User not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = AppError::InternalServerError("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
