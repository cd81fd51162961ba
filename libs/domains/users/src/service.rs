use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, DEFAULT_AGE};
use crate::repository::UserRepository;
use crate::validation;

/// Service layer for user business rules.
///
/// Sole entry point for create/read/update/delete; owns validation,
/// identifier generation, and email uniqueness. Storage is delegated to the
/// injected [`UserRepository`].
///
/// Note on concurrency: the duplicate-email check is a read followed by a
/// write, so two concurrent creates with the same email can both pass the
/// check. The store stays structurally consistent (per-key atomicity), but
/// email uniqueness is not serialized across callers.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All users sorted ascending by name, case-insensitive.
    ///
    /// The sort is stable but ties carry no ordering guarantee beyond the
    /// name comparison. An empty store yields an empty vec.
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        let mut users = self.repository.find_all().await?;
        users.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(users)
    }

    /// Create a new user.
    ///
    /// Validates fields, enforces email uniqueness (case-insensitive),
    /// generates an identifier when none is supplied, and defaults an absent
    /// age to [`DEFAULT_AGE`]. Returns the stored record.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        validation::validate_create(&input)?;

        if self.repository.find_by_email(&input.email).await?.is_some() {
            return Err(UserError::validation("email", "Email is already registered"));
        }

        let id = input
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let user = User {
            id,
            name: input.name,
            email: input.email,
            age: input.age.unwrap_or(DEFAULT_AGE),
        };

        let stored = self.repository.save(user).await?;
        tracing::info!(user_id = %stored.id, "Created user");
        Ok(stored)
    }

    /// Get a user by id.
    ///
    /// A blank id is a validation failure, not a missing record.
    pub async fn get_user(&self, id: &str) -> UserResult<User> {
        validation::validate_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Replace an existing user's name, email, and age.
    ///
    /// The identifier is immutable. Changing the email to one owned by a
    /// different record fails; keeping the record's own email succeeds.
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<User> {
        let mut user = self.get_user(id).await?;

        validation::validate_update(&input)?;

        if let Some(owner) = self.repository.find_by_email(&input.email).await? {
            if owner.id != user.id {
                return Err(UserError::validation("email", "Email is already registered"));
            }
        }

        user.apply_update(input);
        let stored = self.repository.save(user).await?;

        tracing::info!(user_id = %stored.id, "Updated user");
        Ok(stored)
    }

    /// Delete a user by id.
    ///
    /// A removal that reports nothing removed after the existence check is an
    /// internal fault and is surfaced, never swallowed.
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        validation::validate_id(id)?;

        if !self.repository.exists_by_id(id).await? {
            return Err(UserError::NotFound(id.to_string()));
        }

        let removed = self.repository.delete_by_id(id).await?;
        if !removed {
            return Err(UserError::Internal(format!(
                "Failed to remove user {} despite existence check",
                id
            )));
        }

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn create_input(name: &str, email: &str, age: Option<i32>) -> CreateUser {
        CreateUser {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn test_create_generates_id_and_defaults_age() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().returning(|_| Ok(None));
        mock_repo.expect_save().returning(|user| Ok(user));

        let service = UserService::new(mock_repo);
        let user = service
            .create_user(create_input("Ana", "ana@test.com", None))
            .await
            .unwrap();

        assert!(!user.id.is_empty());
        assert_eq!(user.age, DEFAULT_AGE);
    }

    #[tokio::test]
    async fn test_create_keeps_supplied_id() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().returning(|_| Ok(None));
        mock_repo.expect_save().returning(|user| Ok(user));

        let service = UserService::new(mock_repo);
        let user = service
            .create_user(CreateUser {
                id: Some("external-7".to_string()),
                name: "Ana".to_string(),
                email: "ana@test.com".to_string(),
                age: Some(25),
            })
            .await
            .unwrap();

        assert_eq!(user.id, "external-7");
        assert_eq!(user.age, 25);
    }

    #[tokio::test]
    async fn test_create_rejects_registered_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().returning(|_| {
            Ok(Some(User {
                id: "u-1".to_string(),
                name: "Ana".to_string(),
                email: "ana@test.com".to_string(),
                age: 30,
            }))
        });

        let service = UserService::new(mock_repo);
        let err = service
            .create_user(create_input("Other", "ana@test.com", None))
            .await
            .unwrap_err();

        assert_eq!(err.field(), Some("email"));
    }

    #[tokio::test]
    async fn test_create_invalid_input_never_touches_store() {
        // No expectations set: any repository call would panic the test.
        let mock_repo = MockUserRepository::new();

        let service = UserService::new(mock_repo);
        let err = service
            .create_user(create_input("", "ana@test.com", None))
            .await
            .unwrap_err();

        assert_eq!(err.field(), Some("name"));
    }

    #[tokio::test]
    async fn test_delete_surfaces_internal_fault() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_exists_by_id()
            .with(eq("u-1"))
            .returning(|_| Ok(true));
        // Existence check passed but the removal reports nothing removed
        mock_repo
            .expect_delete_by_id()
            .with(eq("u-1"))
            .returning(|_| Ok(false));

        let service = UserService::new(mock_repo);
        let err = service.delete_user("u-1").await.unwrap_err();

        assert!(matches!(err, UserError::Internal(_)));
    }

    #[tokio::test]
    async fn test_blank_id_is_validation_not_not_found() {
        let mock_repo = MockUserRepository::new();
        let service = UserService::new(mock_repo);

        let err = service.get_user("").await.unwrap_err();
        assert!(matches!(err, UserError::Validation { .. }));

        let err = service.delete_user("   ").await.unwrap_err();
        assert!(matches!(err, UserError::Validation { .. }));
    }
}
