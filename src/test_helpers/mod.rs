use actix_web::{web, HttpResponse, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;
use std::sync::Arc;

use crate::user::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::user::adapter::outgoing::UserQueryPostgres;
use crate::user::application::ports::outgoing::UserQuery;

#[derive(Serialize)]
pub struct RandomAccountResponse {
    username: String,
    email: String,
}

#[derive(Serialize)]
pub struct VerificationTokenResponse {
    username: String,
    token: Option<String>,
    is_verified: bool,
}

#[derive(Serialize)]
pub struct CleanupResponse {
    deleted_users: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

fn random_hex(len: usize) -> String {
    (0..len)
        .map(|_| format!("{:x}", rand::random::<u8>() % 16))
        .collect()
}

/// Generate credentials that pass registration validation
/// GET /test/account/random
pub async fn generate_random_account() -> Result<HttpResponse> {
    let ts = chrono::Utc::now().timestamp();

    let username = format!("user_{}_{}", ts, random_hex(4));
    let email = format!("user{}.{}@example.test", ts, random_hex(4));

    Ok(HttpResponse::Ok().json(RandomAccountResponse { username, email }))
}

/// Current pending token for a user, so suites can follow the flow without a mailbox
/// GET /test/verification-token/{username}
pub async fn get_verification_token(
    username: web::Path<String>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let username = username.into_inner();
    let query = UserQueryPostgres::new(Arc::clone(db.get_ref()));

    let user = query
        .find_by_username(&username)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;

    match user {
        Some(user) => Ok(HttpResponse::Ok().json(VerificationTokenResponse {
            username: user.username,
            token: user.verification_token,
            is_verified: user.is_verified,
        })),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "User not found"
        }))),
    }
}

/// Cleanup test data for a user
/// DELETE /test/cleanup/{username}
pub async fn cleanup_test_user(
    username: web::Path<String>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let username = username.into_inner();

    let result = UserEntity::delete_many()
        .filter(UserColumn::Username.eq(&username))
        .exec(db.get_ref().as_ref())
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete user: {}", e))
        })?;

    if result.rows_affected == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "User not found"
        })));
    }

    tracing::debug!(username = %username, "Test user removed");

    Ok(HttpResponse::Ok().json(CleanupResponse {
        deleted_users: result.rows_affected,
    }))
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Additional safety check
    if env == "production" {
        tracing::error!("🚨 Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/account/random", web::get().to(generate_random_account))
            .route(
                "/verification-token/{username}",
                web::get().to(get_verification_token),
            )
            .route("/cleanup/{username}", web::delete().to(cleanup_test_user)),
    );
}
