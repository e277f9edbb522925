use chrono::Utc;
use uuid::Uuid;

use crate::modules::user::application::domain::entities::User;

pub fn pending_user(username: &str, email: &str, token: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: email.to_string(),
        verification_token: Some(token.to_string()),
        is_verified: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn verified_user(username: &str, email: &str) -> User {
    let mut user = pending_user(username, email, "consumed");
    user.mark_verified();
    user
}
