use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::modules::user::application::domain::entities::User;
use crate::modules::user::application::ports::outgoing::{UserQuery, UserQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(user.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(user.map(User::from))
    }

    async fn find_by_username_and_token(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .filter(UserColumn::VerificationToken.eq(token))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(user.map(User::from))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, UserQueryError> {
        let count = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .count(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserQueryError> {
        let count = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .count(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(count > 0)
    }
}
