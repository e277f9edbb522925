use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::modules::user::application::use_cases::CheckVerificationStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatusResponse {
    pub message: String,
    pub username: String,
    pub is_verified: bool,
}

#[get("/user/check-verification/{username}")]
pub async fn check_verification_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    info!(username = %username, "Verification status check");

    match data
        .check_verification_status_use_case
        .execute(&username)
        .await
    {
        Ok(output) => ApiResponse::success(VerificationStatusResponse {
            message: output.message,
            username: output.user.username,
            is_verified: output.user.is_verified,
        }),
        Err(err @ CheckVerificationStatusError::UserNotFound) => {
            warn!(username = %username, "Status check for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", &err.to_string())
        }
        Err(err) => {
            error!(username = %username, error = %err, "Verification status check failed");
            ApiResponse::internal_error()
        }
    }
}
