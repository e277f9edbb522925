pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::email;
pub use modules::user;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::config::{AppConfig, MailConfig, MailTransport};
use crate::email::adapter::outgoing::sendgrid_sender::SendGridEmailSender;
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::email::application::services::UserEmailService;
use crate::user::adapter::outgoing::{
    RandomTokenGenerator, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::user::application::ports::outgoing::VerificationTokenGenerator;
use crate::user::application::use_cases::{
    CheckVerificationStatusUseCase, ICheckVerificationStatusUseCase, IRegisterUserUseCase,
    IResendVerificationUseCase, IVerifyUserEmailUseCase, RegisterUserUseCase,
    ResendVerificationUseCase, VerifyUserEmailUseCase,
};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub verify_user_email_use_case: Arc<dyn IVerifyUserEmailUseCase + Send + Sync>,
    pub check_verification_status_use_case: Arc<dyn ICheckVerificationStatusUseCase + Send + Sync>,
    pub resend_verification_use_case: Arc<dyn IResendVerificationUseCase + Send + Sync>,
}

/// Picks the transport named by `MAIL_TRANSPORT`.
#[cfg(not(tarpaulin_include))]
fn build_email_sender(mail: &MailConfig) -> Arc<dyn EmailSender + Send + Sync> {
    #[cfg(feature = "test-helpers")]
    {
        if !mail.is_configured() {
            tracing::warn!("Mail is not configured, recording outgoing emails in memory");
            return Arc::new(
                crate::email::adapter::outgoing::recording_sender::RecordingEmailSender::new(),
            );
        }
    }

    match &mail.transport {
        MailTransport::SendGrid => {
            if !mail.is_configured() {
                tracing::warn!(
                    "SendGrid is not fully configured, verification emails will not be delivered"
                );
            }
            Arc::new(SendGridEmailSender::new(mail.sendgrid_api_key.clone()))
        }
        MailTransport::Smtp {
            host,
            port,
            credentials,
        } => {
            info!(host = %host, port = port, "Using SMTP mail transport");
            Arc::new(SmtpEmailSender::new_local(host, *port, credentials.clone()))
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");
    health::mark_started();

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        if env == "production" {
            panic!("🚨 FATAL: test-helpers feature enabled in production environment!");
        }
        tracing::warn!("⚠️  Test helper routes are ENABLED for environment: {}", env);
    }

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    let server_url = config.server.bind_address();
    info!(address = %server_url, "Server run on");

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let email_sender = build_email_sender(&config.mail);
    let email_notifier: Arc<dyn UserEmailNotifier + Send + Sync> =
        Arc::new(UserEmailService::new(email_sender, config.mail.clone()));
    let token_generator: Arc<dyn VerificationTokenGenerator + Send + Sync> =
        Arc::new(RandomTokenGenerator);

    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&token_generator),
        Arc::clone(&email_notifier),
    );
    let verify_user_email_use_case = VerifyUserEmailUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&email_notifier),
    );
    let check_verification_status_use_case =
        CheckVerificationStatusUseCase::new(user_query.clone());
    let resend_verification_use_case =
        ResendVerificationUseCase::new(user_query, user_repo, token_generator, email_notifier);

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        verify_user_email_use_case: Arc::new(verify_user_email_use_case),
        check_verification_status_use_case: Arc::new(check_verification_status_use_case),
        resend_verification_use_case: Arc::new(resend_verification_use_case),
    };

    let mail_config = config.mail;

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(mail_config.clone()))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::root);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // User verification
    cfg.service(crate::user::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::verify_email_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::check_verification_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::resend_verification_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
