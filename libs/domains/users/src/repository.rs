use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for user persistence.
///
/// Blank identifiers never reach the map: lookups report "not found" and
/// deletes report "nothing removed" instead of failing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or replace the record at its identifier key.
    ///
    /// Fails with a validation error if the record's identifier is blank.
    async fn save(&self, user: User) -> UserResult<User>;

    /// Get a user by id, or `None` if absent (blank id included).
    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// Independent snapshot of all current records.
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// First record whose email matches case-insensitively.
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Remove the record for `id`; returns whether anything was removed.
    async fn delete_by_id(&self, id: &str) -> UserResult<bool>;

    /// Presence check.
    async fn exists_by_id(&self, id: &str) -> UserResult<bool>;

    /// Number of stored records.
    async fn count(&self) -> UserResult<usize>;

    /// Remove every record. Test/bootstrap capability only; not part of the
    /// service's normal flow.
    async fn clear(&self) -> UserResult<()>;
}

/// In-memory implementation of UserRepository.
///
/// Mutations take the write lock, so readers never observe a partially
/// written record. Clones share the same backing map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> UserResult<User> {
        if user.id.trim().is_empty() {
            return Err(UserError::validation(
                "id",
                "Cannot store a record without an identifier",
            ));
        }

        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());

        tracing::debug!(user_id = %user.id, "Stored user record");
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        if id.trim().is_empty() {
            return Ok(None);
        }

        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        if email.trim().is_empty() {
            return Ok(None);
        }

        let users = self.users.read().await;
        let needle = email.to_lowercase();
        Ok(users
            .values()
            .find(|u| u.email.to_lowercase() == needle)
            .cloned())
    }

    async fn delete_by_id(&self, id: &str) -> UserResult<bool> {
        if id.trim().is_empty() {
            return Ok(false);
        }

        let mut users = self.users.write().await;
        let removed = users.remove(id).is_some();
        if removed {
            tracing::debug!(user_id = %id, "Removed user record");
        }
        Ok(removed)
    }

    async fn exists_by_id(&self, id: &str) -> UserResult<bool> {
        if id.trim().is_empty() {
            return Ok(false);
        }

        let users = self.users.read().await;
        Ok(users.contains_key(id))
    }

    async fn count(&self) -> UserResult<usize> {
        let users = self.users.read().await;
        Ok(users.len())
    }

    async fn clear(&self) -> UserResult<()> {
        let mut users = self.users.write().await;
        users.clear();
        tracing::debug!("Cleared all user records");
        Ok(())
    }
}
