use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::modules::user::application::use_cases::ResendVerificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn map_resend_error(err: ResendVerificationError, username: &str) -> HttpResponse {
    match &err {
        ResendVerificationError::UserNotFound => {
            warn!(username = %username, "Resend for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", &err.to_string())
        }
        ResendVerificationError::AlreadyVerified => {
            warn!(username = %username, "Resend for already verified user");
            ApiResponse::bad_request("USER_ALREADY_VERIFIED", &err.to_string())
        }
        ResendVerificationError::MailDeliveryFailed(_) => {
            ApiResponse::bad_request("EMAIL_DELIVERY_FAILED", &err.to_string())
        }
        ResendVerificationError::QueryError(_) | ResendVerificationError::RepositoryError(_) => {
            error!(username = %username, error = %err, "Resend verification failed");
            ApiResponse::internal_error()
        }
    }
}

#[post("/user/resend-verification/{username}")]
pub async fn resend_verification_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    info!(username = %username, "Resend verification attempt");

    match data.resend_verification_use_case.execute(&username).await {
        Ok(()) => ApiResponse::success(MessageResponse {
            message: "Verification email sent successfully. Please check your email.".to_string(),
        }),
        Err(e) => map_resend_error(e, &username),
    }
}
