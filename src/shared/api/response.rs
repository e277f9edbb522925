// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// JSON envelope shared by every endpoint.
///
/// Successful payloads are flattened next to `success`, so a body such as
/// `{ message, user }` is rendered as `{ "success": true, "message": .., "user": .. }`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        Self::with_status(StatusCode::OK, data)
    }

    pub fn created(data: T) -> HttpResponse {
        Self::with_status(StatusCode::CREATED, data)
    }

    pub fn with_status(status: StatusCode, data: T) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: status.is_success(),
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    #[derive(Serialize)]
    struct Payload {
        message: &'static str,
    }

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_created_flattens_payload() {
        let resp = ApiResponse::created(Payload { message: "done" });
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "done");
        assert!(body.get("data").is_none());
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn test_error_envelope() {
        let resp = ApiResponse::conflict("USERNAME_ALREADY_EXISTS", "Username already exists");
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "USERNAME_ALREADY_EXISTS");
        assert_eq!(body["error"]["message"], "Username already exists");
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let body = body_json(ApiResponse::internal_error()).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "An unexpected error occurred");
    }
}
