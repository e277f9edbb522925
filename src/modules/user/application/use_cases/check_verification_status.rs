use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{User, VerificationStatus};
use crate::modules::user::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationStatusOutput {
    pub user: User,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckVerificationStatusError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait ICheckVerificationStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        username: &str,
    ) -> Result<VerificationStatusOutput, CheckVerificationStatusError>;
}

#[derive(Debug, Clone)]
pub struct CheckVerificationStatusUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> CheckVerificationStatusUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ICheckVerificationStatusUseCase for CheckVerificationStatusUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        username: &str,
    ) -> Result<VerificationStatusOutput, CheckVerificationStatusError> {
        let user = self
            .query
            .find_by_username(username)
            .await?
            .ok_or(CheckVerificationStatusError::UserNotFound)?;

        let message = match user.status() {
            VerificationStatus::Verified => "User is verified",
            VerificationStatus::Pending => "User is not verified",
        };

        Ok(VerificationStatusOutput {
            user,
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{pending_user, verified_user};
    use crate::tests::support::mocks::MockUserQueryMock;
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_pending_user() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_username()
            .with(eq("carol"))
            .returning(|_| Ok(Some(pending_user("carol", "carol@x.com", "T1"))));

        let output = CheckVerificationStatusUseCase::new(query)
            .execute("carol")
            .await
            .unwrap();

        assert_eq!(output.message, "User is not verified");
        assert!(!output.user.is_verified);
    }

    #[tokio::test]
    async fn test_verified_user() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_username()
            .returning(|_| Ok(Some(verified_user("carol", "carol@x.com"))));

        let output = CheckVerificationStatusUseCase::new(query)
            .execute("carol")
            .await
            .unwrap();

        assert_eq!(output.message, "User is verified");
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let mut query = MockUserQueryMock::new();
        query.expect_find_by_username().returning(|_| Ok(None));

        let result = CheckVerificationStatusUseCase::new(query)
            .execute("nouser")
            .await;

        assert!(matches!(
            result,
            Err(CheckVerificationStatusError::UserNotFound)
        ));
    }
}
