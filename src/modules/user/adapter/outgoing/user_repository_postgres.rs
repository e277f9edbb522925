use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::user::application::domain::entities::{NewUser, User};
use crate::modules::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        if matches!(e, DbErr::RecordNotUpdated) {
            return UserRepositoryError::UserNotFound;
        }

        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            verification_token: Set(Some(user.verification_token)),
            is_verified: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.into())
    }

    async fn save_user(&self, user: User) -> Result<User, UserRepositoryError> {
        // username and email never change after registration
        let active_user = UserActiveModel {
            id: Unchanged(user.id),
            username: Unchanged(user.username),
            email: Unchanged(user.email),
            verification_token: Set(user.verification_token),
            is_verified: Set(user.is_verified),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(updated.into())
    }
}
