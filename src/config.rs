use std::env;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Unknown MAIL_TRANSPORT '{0}', expected 'sendgrid' or 'smtp'")]
    UnknownMailTransport(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub mail: MailConfig,
}

impl AppConfig {
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
            mail: MailConfig::from_lookup(&lookup)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(lookup, "PORT", 3000)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let port: u16 = parse_or(lookup, "POSTGRES_PORT", 5432)?;
                format!(
                    "postgres://{}:{}@{}:{}/{}",
                    lookup("POSTGRES_USER").unwrap_or_else(|| "nest".to_string()),
                    lookup("POSTGRES_PASSWORD").unwrap_or_else(|| "nestpass".to_string()),
                    lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string()),
                    port,
                    lookup("POSTGRES_DB").unwrap_or_else(|| "nestdb".to_string()),
                )
            }
        };

        Ok(Self {
            url,
            max_connections: parse_or(lookup, "DB_MAX_CONNECTIONS", 20)?,
            min_connections: parse_or(lookup, "DB_MIN_CONNECTIONS", 2)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MailTransport {
    SendGrid,
    Smtp {
        host: String,
        port: u16,
        credentials: Option<(String, String)>,
    },
}

/// Sender identity, template identifiers and transport selection for
/// outgoing user emails.
#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    pub sendgrid_api_key: Option<String>,
    pub from_name: String,
    pub from_email: String,
    pub app_base_url: String,
    pub verification_template_id: Option<String>,
    pub welcome_template_id: Option<String>,
    pub transport: MailTransport,
}

impl MailConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let transport = match lookup("MAIL_TRANSPORT")
            .map(|t| t.to_lowercase())
            .as_deref()
        {
            None | Some("sendgrid") => MailTransport::SendGrid,
            Some("smtp") => MailTransport::Smtp {
                host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or(lookup, "SMTP_PORT", 1025)?,
                credentials: lookup("SMTP_USERNAME").zip(lookup("SMTP_PASSWORD")),
            },
            Some(other) => return Err(ConfigError::UnknownMailTransport(other.to_string())),
        };

        let app_base_url = lookup("APP_BASE_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            sendgrid_api_key: non_empty(lookup("SENDGRID_API_KEY")),
            from_name: lookup("MAIL_FROM_NAME").unwrap_or_else(|| "Email Verification".to_string()),
            from_email: lookup("MAIL_FROM_EMAIL")
                .unwrap_or_else(|| "no-reply@example.com".to_string()),
            app_base_url,
            verification_template_id: non_empty(lookup("SENDGRID_VERIFICATION_TEMPLATE_ID")),
            welcome_template_id: non_empty(lookup("SENDGRID_WELCOME_TEMPLATE_ID")),
            transport,
        })
    }

    pub fn verification_link(&self, username: &str, token: &str) -> String {
        format!("{}/user/verify-email/{}/{}", self.app_base_url, username, token)
    }

    pub fn profile_url(&self) -> String {
        format!("{}/profile", self.app_base_url)
    }

    /// Whether the selected transport has what it needs to deliver
    /// verification emails.
    pub fn is_configured(&self) -> bool {
        match self.transport {
            MailTransport::SendGrid => {
                self.sendgrid_api_key.is_some() && self.verification_template_id.is_some()
            }
            MailTransport::Smtp { .. } => true,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key,
            expected: std::any::type_name::<T>(),
            value: raw,
        }),
    }
}
