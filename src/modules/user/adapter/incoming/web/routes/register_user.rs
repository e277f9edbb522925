use std::sync::LazyLock;

use actix_web::{post, web, HttpResponse, Responder};
use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::user_response::UserMessageResponse;
use crate::modules::user::application::use_cases::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern is valid"));

/// RFC 5321 path limit; also fits the `varchar(255)` email column.
const MAX_EMAIL_LEN: usize = 254;

#[derive(Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
}

impl RegisterUserRequest {
    /// Returns the first violated rule as a user-facing message.
    pub fn validate(&self) -> Result<(), &'static str> {
        let len = self.username.chars().count();
        if !(3..=50).contains(&len) {
            return Err("Username must be between 3 and 50 characters");
        }
        if !USERNAME_PATTERN.is_match(&self.username) {
            return Err("Username can only contain letters, numbers, and underscores");
        }
        if self.email.len() > MAX_EMAIL_LEN || !EmailAddress::is_valid(&self.email) {
            return Err("Please provide a valid email address");
        }
        Ok(())
    }
}

fn map_register_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match &err {
        RegisterUserError::UsernameAlreadyExists => {
            warn!(username = %req.username, "Username already exists");
            ApiResponse::conflict("USERNAME_ALREADY_EXISTS", &err.to_string())
        }

        RegisterUserError::EmailAlreadyExists => {
            warn!(username = %req.username, "Email already exists");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", &err.to_string())
        }

        RegisterUserError::QueryError(_) | RegisterUserError::RepositoryError(_) => {
            error!(
                username = %req.username,
                error = %err,
                "User registration failed"
            );
            ApiResponse::internal_error()
        }
    }
}

#[post("/user/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, "User registration attempt");

    if let Err(message) = req.validate() {
        warn!(username = %req.username, reason = message, "Invalid registration input");
        return ApiResponse::bad_request("VALIDATION_ERROR", message);
    }

    let input = RegisterUserInput {
        username: req.username.clone(),
        email: req.email.clone(),
    };

    match data.register_user_use_case.execute(input).await {
        Ok(user) => {
            info!(
                user_id = %user.id,
                username = %user.username,
                "User registered"
            );

            ApiResponse::created(UserMessageResponse {
                message: "User registered successfully. Please check your email for verification."
                    .to_string(),
                user: user.into(),
            })
        }
        Err(e) => map_register_error(e, &req),
    }
}
