use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum accepted name length, in characters.
pub const MIN_NAME_LENGTH: usize = 2;
/// Maximum accepted name length, in characters.
pub const MAX_NAME_LENGTH: usize = 50;
/// Minimum accepted age.
pub const MIN_AGE: i32 = 0;
/// Maximum accepted age.
pub const MAX_AGE: i32 = 120;
/// Age assigned when a request omits it.
pub const DEFAULT_AGE: i32 = 0;

/// User entity - the stored record.
///
/// Invariants held by the service layer: `id` is non-empty, `email` is unique
/// across the store (case-insensitive), `age` is within
/// [`MIN_AGE`]..=[`MAX_AGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier (opaque string token)
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email, unique case-insensitively
    pub email: String,
    /// Age in years
    pub age: i32,
}

impl User {
    /// Replace the mutable fields from an update request.
    ///
    /// The identifier never changes; an omitted age falls back to
    /// [`DEFAULT_AGE`] so the stored record always carries a value.
    pub fn apply_update(&mut self, update: UpdateUser) {
        self.name = update.name;
        self.email = update.email;
        self.age = update.age.unwrap_or(DEFAULT_AGE);
    }
}

/// DTO for creating a new user.
///
/// `id` is normally absent and generated by the service; callers that manage
/// their own identifiers may supply one. `age` defaults to [`DEFAULT_AGE`].
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}

/// DTO for replacing an existing user's fields (full replacement).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}

/// Boundary projection of a user record.
///
/// `created_at` is stamped when the response is built, not stored with the
/// entity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_replaces_fields_but_not_id() {
        let mut user = User {
            id: "u-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@test.com".to_string(),
            age: 30,
        };

        user.apply_update(UpdateUser {
            name: "Ana Maria".to_string(),
            email: "ana.maria@test.com".to_string(),
            age: Some(31),
        });

        assert_eq!(user.id, "u-1");
        assert_eq!(user.name, "Ana Maria");
        assert_eq!(user.email, "ana.maria@test.com");
        assert_eq!(user.age, 31);
    }

    #[test]
    fn test_apply_update_defaults_omitted_age() {
        let mut user = User {
            id: "u-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@test.com".to_string(),
            age: 30,
        };

        user.apply_update(UpdateUser {
            name: "Ana".to_string(),
            email: "ana@test.com".to_string(),
            age: None,
        });

        assert_eq!(user.age, DEFAULT_AGE);
    }

    #[test]
    fn test_create_user_deserializes_without_id_and_age() {
        let input: CreateUser =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@test.com"}"#).unwrap();
        assert!(input.id.is_none());
        assert!(input.age.is_none());
    }

    #[test]
    fn test_response_projection_stamps_timestamp() {
        let before = Utc::now();
        let response = UserResponse::from(User {
            id: "u-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@test.com".to_string(),
            age: 25,
        });
        assert!(response.created_at >= before);
        assert_eq!(response.age, 25);
    }
}
