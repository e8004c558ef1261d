use std::env;

use crate::constants::DEFAULT_SECRET_KEY;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_path: String,
    pub static_dir: String,
    pub upload_dir: String,
    pub secret_key: String,
    pub mail: Option<MailConfig>,
}

/// Outbound SMTP settings for the contact form
///
/// Only present when host, username and password are all configured;
/// otherwise the contact form runs in its degraded accept-only mode.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub recipient: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "instance/portfolio.db".to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "static/uploads".to_string());

        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("SECRET_KEY not set, using default - sessions are not secure");
            DEFAULT_SECRET_KEY.to_string()
        });

        let mail = Self::mail_from_env()?;

        Ok(Config {
            server_host,
            server_port,
            database_path,
            static_dir,
            upload_dir,
            secret_key,
            mail,
        })
    }

    /// Build the optional SMTP block; present only if host, user and
    /// password are all set.
    fn mail_from_env() -> Result<Option<MailConfig>, String> {
        let host = env::var("SMTP_HOST").ok();
        let username = env::var("SMTP_USER").ok();
        let password = env::var("SMTP_PASS").ok();

        let (host, username, password) = match (host, username, password) {
            (Some(h), Some(u), Some(p)) => (h, u, p),
            _ => return Ok(None),
        };

        let port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .map_err(|_| "Invalid SMTP_PORT")?;

        // The contact form delivers to the site owner; default to the
        // SMTP account itself when no dedicated recipient is configured.
        let recipient =
            env::var("CONTACT_RECIPIENT_EMAIL").unwrap_or_else(|_| username.clone());

        Ok(Some(MailConfig {
            host,
            port,
            username,
            password,
            recipient,
        }))
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
