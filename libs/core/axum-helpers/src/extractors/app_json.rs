//! JSON extractor with envelope-formatted rejections.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`] but renders extraction failures (malformed
/// JSON, wrong content type, type mismatches) with the shared
/// [`ErrorResponse`](crate::errors::ErrorResponse) envelope. Field-level
/// validation is a service concern and happens after extraction.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::AppJson;
///
/// async fn create_user(AppJson(payload): AppJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.name)
/// }
/// ```
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(data)) => Ok(AppJson(data)),
            Err(rejection) => Err(AppError::from(rejection).into_response()),
        }
    }
}
