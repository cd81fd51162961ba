//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2026-08-24T10:15:30Z",
        "status": 500,
        "error": "Internal Server Error",
        "message": "An internal server error occurred",
        "path": "/api/v1/users"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2026-08-24T10:15:30Z",
        "status": 400,
        "error": "Validation Error",
        "message": "name: Name must be between 2 and 50 characters",
        "path": "/api/v1/users"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "timestamp": "2026-08-24T10:15:30Z",
        "status": 404,
        "error": "Not Found",
        "message": "User not found: 42",
        "path": "/api/v1/users/42"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
