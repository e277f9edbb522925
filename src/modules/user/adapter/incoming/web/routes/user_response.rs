use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::user::application::domain::entities::User;

/// Public projection of a user. The verification token is never exposed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserMessageResponse {
    pub message: String,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::pending_user;

    #[test]
    fn test_projection_is_camel_case_without_token() {
        let user = pending_user("alice", "alice@x.com", "secret-token");
        let value = serde_json::to_value(UserResponse::from(user)).unwrap();

        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["createdAt", "email", "id", "isVerified", "username"]);
        assert!(!value.to_string().contains("secret-token"));
    }
}
