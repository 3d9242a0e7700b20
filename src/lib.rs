//! Spanish Trainer API Server Library
//!
//! Accounts with bearer-token auth plus two opaque JSON documents per user
//! (learning progress and navigation state).

pub mod auth;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;
pub mod token;

pub use auth::{AuthService, AuthUser};
pub use config::Config;
pub use db::{open_database, Db};
pub use error::{AppError, Result};
pub use token::TokenService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub auth: AuthService,
}

impl AppState {
    /// Create a new AppState, wiring the auth component to the given store
    pub fn new(db: Db, config: &Config) -> Self {
        let tokens = TokenService::new(config.token_secret.clone(), config.token_ttl_secs);
        let auth = AuthService::new(db.clone(), tokens);

        Self { db, auth }
    }
}
