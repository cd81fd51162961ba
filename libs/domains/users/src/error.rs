use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// Shorthand for a field-scoped validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        UserError::Validation {
            field,
            message: message.into(),
        }
    }

    /// The offending field, when this is a validation failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            UserError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User not found: {}", id)),
            UserError::Validation { field, message } => {
                AppError::BadRequest(format!("{}: {}", field, message))
            }
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        // Render through AppError so every failure shares the envelope format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
