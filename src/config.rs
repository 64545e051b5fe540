// src/config.rs

use std::env;

use dotenvy::dotenv;

/// Default access token lifetime: 30 minutes.
pub const DEFAULT_JWT_EXPIRATION: u64 = 30 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Without one the service keeps its data in memory.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub admin_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let jwt_secret = non_empty("JWT_SECRET").ok_or("JWT_SECRET must be set")?;

        let jwt_expiration = match non_empty("JWT_EXPIRATION") {
            Some(v) => v
                .parse()
                .map_err(|_| format!("JWT_EXPIRATION must be a number of seconds, got '{v}'"))?,
            None => DEFAULT_JWT_EXPIRATION,
        };

        let port = match non_empty("PORT") {
            Some(v) => v
                .parse()
                .map_err(|_| format!("PORT must be a valid port number, got '{v}'"))?,
            None => 8000,
        };

        let cors_origins = non_empty("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            jwt_secret,
            jwt_expiration,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            port,
            cors_origins,
            admin_username: non_empty("ADMIN_USERNAME"),
            admin_password: non_empty("ADMIN_PASSWORD"),
            admin_email: non_empty("ADMIN_EMAIL")
                .unwrap_or_else(|| "admin@example.com".to_string()),
        })
    }
}
