use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::user::application::domain::entities::{NewUser, User};
use crate::modules::user::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

/// User store backed by a vector. Rejects duplicate usernames and emails the
/// way the database unique constraints do.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn get(&self, username: &str) -> Option<User> {
        self.snapshot().into_iter().find(|u| u.username == username)
    }

    /// Inserts directly, bypassing the pre-checks, to simulate a concurrent writer.
    pub fn insert_raw(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    fn find(&self, predicate: impl Fn(&User) -> bool) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| predicate(u)).cloned()
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.find(|u| u.username == username))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.find(|u| u.email == email))
    }

    async fn find_by_username_and_token(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Option<User>, UserQueryError> {
        Ok(self.find(|u| u.username == username && u.verification_token.as_deref() == Some(token)))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, UserQueryError> {
        Ok(self.find(|u| u.username == username).is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserQueryError> {
        Ok(self.find(|u| u.email == email).is_some())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            verification_token: Some(user.verification_token),
            is_verified: false,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn save_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let stored = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        stored.verification_token = user.verification_token;
        stored.is_verified = user.is_verified;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }
}
