use std::sync::Arc;

use async_trait::async_trait;

use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier,
};
use crate::modules::user::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError, VerificationTokenGenerator,
};

#[derive(Debug, thiserror::Error)]
pub enum ResendVerificationError {
    #[error("User not found")]
    UserNotFound,

    #[error("User is already verified")]
    AlreadyVerified,

    /// The rotated token is already persisted when this is returned.
    #[error("Failed to send verification email")]
    MailDeliveryFailed(#[source] UserEmailNotificationError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

#[async_trait]
pub trait IResendVerificationUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<(), ResendVerificationError>;
}

/// Rotates the pending token and re-sends it. Unlike registration, delivery
/// failure is the operation's failure.
#[derive(Clone)]
pub struct ResendVerificationUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    token_generator: Arc<dyn VerificationTokenGenerator + Send + Sync>,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<Q, R> ResendVerificationUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        token_generator: Arc<dyn VerificationTokenGenerator + Send + Sync>,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            token_generator,
            email_notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IResendVerificationUseCase for ResendVerificationUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<(), ResendVerificationError> {
        let mut user = self
            .query
            .find_by_username(username)
            .await?
            .ok_or(ResendVerificationError::UserNotFound)?;

        let token = self.token_generator.generate();
        if !user.rotate_token(token.clone()) {
            return Err(ResendVerificationError::AlreadyVerified);
        }

        let user = self.repository.save_user(user).await.map_err(|e| match e {
            UserRepositoryError::UserNotFound => ResendVerificationError::UserNotFound,
            other => ResendVerificationError::RepositoryError(other),
        })?;

        self.email_notifier
            .send_verification_email(&user.email, &user.username, &token)
            .await
            .map_err(|e| {
                tracing::error!(
                    username = %user.username,
                    error = %e,
                    "Failed to resend verification email"
                );
                ResendVerificationError::MailDeliveryFailed(e)
            })
    }
}
