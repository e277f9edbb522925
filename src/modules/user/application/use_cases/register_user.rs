use std::sync::Arc;

use async_trait::async_trait;

use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::modules::user::application::domain::entities::{NewUser, User};
use crate::modules::user::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError, VerificationTokenGenerator,
};

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError>;
}

/// Creates a pending user with a fresh verification token, then tries to
/// deliver the verification email. Delivery failure never fails registration.
#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    token_generator: Arc<dyn VerificationTokenGenerator + Send + Sync>,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
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

    /// The store rejected the insert on a unique constraint after both
    /// pre-checks passed. Work out which field lost the race.
    async fn resolve_conflict(&self, input: &RegisterUserInput) -> RegisterUserError {
        if let Ok(false) = self.query.exists_by_username(&input.username).await {
            if let Ok(true) = self.query.exists_by_email(&input.email).await {
                return RegisterUserError::EmailAlreadyExists;
            }
        }
        RegisterUserError::UsernameAlreadyExists
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError> {
        if self.query.exists_by_username(&input.username).await? {
            return Err(RegisterUserError::UsernameAlreadyExists);
        }

        if self.query.exists_by_email(&input.email).await? {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let token = self.token_generator.generate();

        let user = match self
            .repository
            .create_user(NewUser {
                username: input.username.clone(),
                email: input.email.clone(),
                verification_token: token.clone(),
            })
            .await
        {
            Ok(user) => user,
            Err(UserRepositoryError::UserAlreadyExists) => {
                tracing::warn!(
                    username = %input.username,
                    "Unique constraint rejected registration after pre-check"
                );
                return Err(self.resolve_conflict(&input).await);
            }
            Err(e) => return Err(RegisterUserError::RepositoryError(e)),
        };

        if let Err(e) = self
            .email_notifier
            .send_verification_email(&user.email, &user.username, &token)
            .await
        {
            tracing::error!(
                username = %user.username,
                error = %e,
                "Failed to send verification email during registration"
            );
        }

        Ok(user)
    }
}
