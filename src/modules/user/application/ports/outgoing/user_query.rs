// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::modules::user::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the user store. Absence is `Ok(None)`, never an error.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_by_username_and_token(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Option<User>, UserQueryError>;

    async fn exists_by_username(&self, username: &str) -> Result<bool, UserQueryError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserQueryError>;
}
