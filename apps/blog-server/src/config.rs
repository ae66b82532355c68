//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use quill_infra::auth::DEFAULT_JWT_SECRET;
use quill_infra::{DatabaseConfig, JwtConfig, MailConfig};

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// The single admin credential pair.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub upload_dir: PathBuf,
    pub admin: AdminConfig,
    pub jwt: JwtConfig,
    pub mail: Option<MailConfig>,
    pub notify_timeout: Duration,
    /// Set when `RUST_ENV` is `production`/`prod`; marks the session cookie `Secure`.
    pub production: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database: None,
            upload_dir: PathBuf::from("public/uploads"),
            admin: AdminConfig {
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                password: DEFAULT_ADMIN_PASSWORD.to_string(),
            },
            jwt: JwtConfig::default(),
            mail: None,
            notify_timeout: Duration::from_secs(10),
            production: false,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let production = env::var("RUST_ENV")
            .map(|v| v == "production" || v == "prod")
            .unwrap_or(false);

        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_env("DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parse_env("DB_MIN_CONNECTIONS").unwrap_or(2),
        });

        let notify_timeout = parse_env("NOTIFY_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.notify_timeout);

        let config = Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT").unwrap_or(defaults.port),
            database,
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            admin: AdminConfig {
                username: env::var("ADMIN_USERNAME").unwrap_or(defaults.admin.username),
                password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin.password),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt.secret),
                expiration_hours: parse_env("JWT_EXPIRATION_HOURS")
                    .unwrap_or(defaults.jwt.expiration_hours),
                issuer: env::var("JWT_ISSUER").unwrap_or(defaults.jwt.issuer),
            },
            mail: Self::parse_mail(notify_timeout),
            notify_timeout,
            production,
        };

        config.warn_on_defaults();
        config
    }

    /// Mail relay settings. Without `MAIL_RELAY_URL` notices are only logged.
    fn parse_mail(timeout: Duration) -> Option<MailConfig> {
        let relay_url = env::var("MAIL_RELAY_URL").ok()?;

        Some(MailConfig {
            relay_url,
            username: env::var("MAIL_USERNAME").ok(),
            password: env::var("MAIL_PASSWORD").ok(),
            from: env::var("MAIL_FROM").unwrap_or_else(|_| "blog@localhost".to_string()),
            to: env::var("MAIL_TO").unwrap_or_else(|_| "admin@localhost".to_string()),
            timeout,
        })
    }

    /// Flag hard-coded secrets that are still in use.
    fn warn_on_defaults(&self) {
        let mut defaults_in_use = Vec::new();
        if self.jwt.secret == DEFAULT_JWT_SECRET {
            defaults_in_use.push("JWT_SECRET");
        }
        if self.admin.password == DEFAULT_ADMIN_PASSWORD {
            defaults_in_use.push("ADMIN_PASSWORD");
        }
        if defaults_in_use.is_empty() {
            return;
        }

        if self.production {
            tracing::error!(
                settings = ?defaults_in_use,
                "SECURITY: Using built-in defaults in production! Set these environment variables."
            );
        } else {
            tracing::warn!(
                settings = ?defaults_in_use,
                "Using built-in defaults. Set these environment variables for production use."
            );
        }
    }
}
