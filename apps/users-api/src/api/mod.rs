//! API routes module
//!
//! This module defines all HTTP API routes for the Users API.

pub mod ready;

use axum::Router;
use domain_users::{InMemoryUserRepository, UserService, handlers};

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(service: UserService<InMemoryUserRepository>) -> Router {
    Router::new().nest("/v1/users", handlers::router(service))
}
