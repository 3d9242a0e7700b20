//! Registration, login and bearer-token authorization
//!
//! Protected handlers take an [`AuthUser`] argument; the extractor runs
//! [`AuthService::authorize`] before the handler body and rejects the request
//! with `401` if the token does not resolve to a user.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use chrono::Utc;

use crate::db::{users, Db};
use crate::error::{AppError, Result};
use crate::models::{Credentials, PublicUser};
use crate::security::{dummy_verify, hash_password, verify_password};
use crate::token::{IssuedToken, TokenService};
use crate::AppState;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user_id: i64,
    pub token: IssuedToken,
}

/// Auth component wired with its store and token service at startup
#[derive(Debug, Clone)]
pub struct AuthService {
    db: Db,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(db: Db, tokens: TokenService) -> Self {
        Self { db, tokens }
    }

    /// Create a user with a salted Argon2id hash of the password
    pub async fn register(&self, credentials: &Credentials) -> Result<PublicUser> {
        let email = credentials.validate()?.to_string();

        let password = credentials.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await?
            .map_err(AppError::PasswordHash)?;

        let id = users::insert_user(&self.db, &email, &password_hash)
            .await
            .inspect_err(|e| {
                if matches!(e, AppError::DuplicateIdentity) {
                    tracing::info!("Registration rejected: email already registered");
                }
            })?;

        tracing::info!("New user registered: id {}", id);

        Ok(PublicUser { id, email })
    }

    /// Check the password and issue an access token
    ///
    /// Unknown email and wrong password both end in `InvalidCredentials`,
    /// and both pay for one Argon2 verification.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome> {
        let email = credentials.validate()?;
        let user = users::find_by_email(&self.db, email).await?;
        let password = credentials.password.clone();

        let user_id = match user {
            Some(user) => {
                let hash = user.password_hash;
                let matches =
                    tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?;
                matches.then_some(user.id)
            }
            None => {
                tokio::task::spawn_blocking(move || dummy_verify(&password)).await?;
                None
            }
        };

        let Some(user_id) = user_id else {
            tracing::warn!("Failed login attempt");
            return Err(AppError::InvalidCredentials);
        };

        let token = self.tokens.issue(user_id, Utc::now().timestamp());
        tracing::info!(
            "User {} logged in, token expires at {}",
            user_id,
            token.expires_at
        );

        Ok(LoginOutcome { user_id, token })
    }

    /// Resolve a bearer token to the user it was issued for
    pub async fn authorize(&self, token: &str) -> Result<PublicUser> {
        let user_id = self.tokens.verify(token, Utc::now().timestamp())?;

        match users::find_by_id(&self.db, user_id).await? {
            Some(user) => Ok(user.into()),
            None => {
                tracing::warn!("Valid token for missing user {}", user_id);
                Err(AppError::Unauthenticated)
            }
        }
    }
}

/// Pull the credential out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authenticated identity injected into protected handlers
#[derive(Debug, Clone)]
pub struct AuthUser(pub PublicUser);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthenticated)?;
        let user = state.auth.authorize(token).await?;

        Ok(AuthUser(user))
    }
}
