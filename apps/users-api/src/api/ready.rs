//! Readiness endpoint
//!
//! Reports whether the user store is reachable, plus the current record
//! count. The store is in-process memory, so readiness effectively means
//! the service is up and serving.

use axum::{Json, Router, extract::State, routing::get};
use domain_users::{InMemoryUserRepository, UserRepository};
use serde::Serialize;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    users: usize,
}

/// Create the readiness router
pub fn router(repository: InMemoryUserRepository) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(repository)
}

/// Readiness check - verifies the user store answers
async fn readiness_check(State(repository): State<InMemoryUserRepository>) -> Json<ReadyResponse> {
    match repository.count().await {
        Ok(users) => Json(ReadyResponse {
            status: "ready".to_string(),
            users,
        }),
        Err(_) => Json(ReadyResponse {
            status: "unhealthy".to_string(),
            users: 0,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_users::User;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_ready_reports_store_count() {
        let repository = InMemoryUserRepository::new();
        repository
            .save(User {
                id: "u-1".to_string(),
                name: "Ana".to_string(),
                email: "ana@test.com".to_string(),
                age: 30,
            })
            .await
            .unwrap();

        let app = router(repository);

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ready");
        assert_eq!(body["users"], 1);
    }
}
