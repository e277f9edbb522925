use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{NewUser, User};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    /// Unique constraint on username or email rejected the write.
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Persists the verification fields of an existing user and returns the stored row.
    async fn save_user(&self, user: User) -> Result<User, UserRepositoryError>;
}
