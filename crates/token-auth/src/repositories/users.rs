//! User directory.
//!
//! The directory is an external collaborator: lookups may be slow or fail.
//! Callers hold no lock across a lookup.

use crate::models::User;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of the directory itself, as opposed to an unknown user.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("user directory unavailable: {0}")]
    Unavailable(String),
}

/// Lookup of users by username.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by exact username. `Ok(None)` when no such user exists.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DirectoryError>;
}

/// Fixed in-memory user list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Vec<User>,
}

impl InMemoryUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The demo users `admin/admin` and `example/temp`.
    pub fn with_demo_users() -> Self {
        Self::new(vec![User::new("admin", "admin"), User::new("example", "temp")])
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DirectoryError> {
        // First match wins if a username appears twice.
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }
}
