use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::{Arc, LazyLock};
use std::time::Instant;

use crate::config::MailConfig;

static STARTED_AT: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Pins the uptime origin. Called once at startup.
pub fn mark_started() {
    LazyLock::force(&STARTED_AT);
}

#[derive(Serialize)]
struct RootResponse {
    status: &'static str,
    message: &'static str,
    timestamp: String,
    version: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime: u64,
    timestamp: String,
}

#[derive(Serialize)]
struct ServicesStatus {
    database: &'static str,
    mail: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    services: ServicesStatus,
}

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        status: "ok",
        message: "Email Verification API is running",
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        uptime: STARTED_AT.elapsed().as_secs(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// READINESS PROBE
/// - Database must answer `SELECT 1`
/// - Mail is reported but never fails the probe
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    mail: web::Data<MailConfig>,
) -> impl Responder {
    let db_status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            tracing::error!(error = %e, "Readiness database check failed");
            "unhealthy"
        }
    };

    let mail_status = if mail.is_configured() {
        "configured"
    } else {
        "not_configured"
    };

    let body = ReadinessResponse {
        status: if db_status == "ok" { "ok" } else { "unhealthy" },
        services: ServicesStatus {
            database: db_status,
            mail: mail_status,
        },
    };

    if db_status == "ok" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
