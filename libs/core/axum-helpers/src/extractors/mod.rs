//! Custom extractors for Axum handlers.
//!
//! These standardize error handling across the API: extraction failures are
//! rendered with the shared error envelope instead of axum's default
//! plain-text rejections.

pub mod app_json;

pub use app_json::AppJson;
