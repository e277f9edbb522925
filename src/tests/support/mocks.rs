use async_trait::async_trait;
use mockall::mock;

use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier,
};
use crate::modules::user::application::domain::entities::{NewUser, User};
use crate::modules::user::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

mock! {
    pub UserQueryMock {}
    #[async_trait]
    impl UserQuery for UserQueryMock {
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
}

mock! {
    pub UserRepositoryMock {}
    #[async_trait]
    impl UserRepository for UserRepositoryMock {
        async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;
        async fn save_user(&self, user: User) -> Result<User, UserRepositoryError>;
    }
}

mock! {
    pub EmailNotifierMock {}
    #[async_trait]
    impl UserEmailNotifier for EmailNotifierMock {
        async fn send_verification_email(
            &self,
            email: &str,
            username: &str,
            token: &str,
        ) -> Result<(), UserEmailNotificationError>;
        async fn send_welcome_email(
            &self,
            email: &str,
            username: &str,
        ) -> Result<(), UserEmailNotificationError>;
    }
}
