//! Field validation rules for user records.
//!
//! Stateless checks invoked by the service before any mutation. Checks are
//! fail-fast in field order (name, email, age) so a malformed single field
//! produces a single field-scoped error.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, MAX_AGE, MAX_NAME_LENGTH, MIN_AGE, MIN_NAME_LENGTH};

/// Standard address shape: local-part "@" domain "." TLD, TLD length >= 2.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// Check an identifier used for lookups and deletes.
pub fn validate_id(id: &str) -> UserResult<()> {
    if id.trim().is_empty() {
        return Err(UserError::validation("id", "Identifier must not be blank"));
    }
    Ok(())
}

/// Validate a create request's fields.
pub fn validate_create(input: &CreateUser) -> UserResult<()> {
    validate_fields(&input.name, &input.email, input.age)
}

/// Validate an update request's fields.
pub fn validate_update(input: &UpdateUser) -> UserResult<()> {
    validate_fields(&input.name, &input.email, input.age)
}

fn validate_fields(name: &str, email: &str, age: Option<i32>) -> UserResult<()> {
    if name.trim().is_empty() {
        return Err(UserError::validation("name", "Name is required"));
    }

    let name_length = name.chars().count();
    if name_length < MIN_NAME_LENGTH || name_length > MAX_NAME_LENGTH {
        return Err(UserError::validation(
            "name",
            format!(
                "Name must be between {} and {} characters",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH
            ),
        ));
    }

    if email.trim().is_empty() {
        return Err(UserError::validation("email", "Email is required"));
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserError::validation(
            "email",
            "Email must be a valid address",
        ));
    }

    if let Some(age) = age {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(UserError::validation(
                "age",
                format!("Age must be between {} and {}", MIN_AGE, MAX_AGE),
            ));
        }
    }

    Ok(())
}
