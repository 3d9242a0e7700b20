use std::env;

use crate::constants::{DEFAULT_TOKEN_TTL_SECS, MIN_TOKEN_SECRET_BYTES};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub environment: String,
    pub token_secret: String,
    pub token_ttl_secs: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://./data/trainer.db".to_string());

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let token_secret = env::var("TOKEN_SECRET")
            .map_err(|_| "TOKEN_SECRET must be set for signing access tokens")?;
        if token_secret.len() < MIN_TOKEN_SECRET_BYTES {
            return Err(format!(
                "TOKEN_SECRET must be at least {} bytes",
                MIN_TOKEN_SECRET_BYTES
            ));
        }

        let token_ttl_secs: i64 = env::var("TOKEN_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_SECS.to_string())
            .parse()
            .map_err(|_| "Invalid TOKEN_TTL_SECS")?;
        if token_ttl_secs <= 0 {
            return Err("TOKEN_TTL_SECS must be positive".to_string());
        }

        Ok(Config {
            server_host,
            server_port,
            database_url,
            environment,
            token_secret,
            token_ttl_secs,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
