// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Malformed or mistyped JSON bodies are answered with the standard
/// `VALIDATION_ERROR` envelope instead of actix's plain-text default.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::warn!(error = %message, "Rejected malformed JSON body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
