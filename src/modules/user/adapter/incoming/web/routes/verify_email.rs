use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use super::user_response::UserMessageResponse;
use crate::modules::user::application::use_cases::VerifyUserEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_verify_error(err: VerifyUserEmailError, username: &str) -> HttpResponse {
    match &err {
        VerifyUserEmailError::InvalidToken => {
            warn!(username = %username, "Invalid verification token");
            ApiResponse::bad_request("INVALID_VERIFICATION_TOKEN", &err.to_string())
        }
        VerifyUserEmailError::UserNotFound => {
            warn!(username = %username, "Verification for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", &err.to_string())
        }
        VerifyUserEmailError::QueryError(_) | VerifyUserEmailError::RepositoryError(_) => {
            error!(username = %username, error = %err, "Email verification failed");
            ApiResponse::internal_error()
        }
    }
}

#[get("/user/verify-email/{username}/{token}")]
pub async fn verify_email_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (username, token) = path.into_inner();

    info!(username = %username, "Email verification attempt");

    match data.verify_user_email_use_case.execute(&username, &token).await {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "Email verified");
            ApiResponse::success(UserMessageResponse {
                message: "Email verified successfully".to_string(),
                user: user.into(),
            })
        }
        Err(e) => map_verify_error(e, &username),
    }
}
