use std::sync::Arc;

use async_trait::async_trait;

use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::modules::user::application::domain::entities::User;
use crate::modules::user::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

#[derive(Debug, thiserror::Error)]
pub enum VerifyUserEmailError {
    #[error("Invalid verification token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

#[async_trait]
pub trait IVerifyUserEmailUseCase: Send + Sync {
    async fn execute(&self, username: &str, token: &str) -> Result<User, VerifyUserEmailError>;
}

#[derive(Clone)]
pub struct VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<Q, R> VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            email_notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IVerifyUserEmailUseCase for VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, username: &str, token: &str) -> Result<User, VerifyUserEmailError> {
        let Some(mut user) = self
            .query
            .find_by_username_and_token(username, token)
            .await?
        else {
            // The token is cleared on verification, so a stale link for a
            // verified user only matches by username.
            return match self.query.find_by_username(username).await? {
                Some(user) if user.is_verified => Ok(user),
                Some(_) => Err(VerifyUserEmailError::InvalidToken),
                None => Err(VerifyUserEmailError::UserNotFound),
            };
        };

        if user.is_verified {
            return Ok(user);
        }

        user.mark_verified();

        let verified = self.repository.save_user(user).await.map_err(|e| match e {
            UserRepositoryError::UserNotFound => VerifyUserEmailError::UserNotFound,
            other => VerifyUserEmailError::RepositoryError(other),
        })?;

        if let Err(e) = self
            .email_notifier
            .send_welcome_email(&verified.email, &verified.username)
            .await
        {
            tracing::error!(
                username = %verified.username,
                error = %e,
                "Failed to send welcome email"
            );
        }

        Ok(verified)
    }
}
