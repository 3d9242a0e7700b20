//! Stateless bearer tokens
//!
//! A token is `<user_id>.<expires_at>.<signature>` where `expires_at` is a Unix
//! timestamp in seconds and `signature` is the hex HMAC-SHA256 of
//! `<user_id>.<expires_at>` under the server secret. Nothing is stored
//! server-side; a token dies when it expires.

use crate::error::AppError;
use crate::security::{sign_hmac, verify_hmac};

/// Why a presented token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Malformed,
    BadSignature,
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        tracing::debug!("Rejected bearer token: {:?}", err);
        AppError::Unauthenticated
    }
}

/// A freshly issued token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}

/// Issues and verifies signed access tokens
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_secs: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    /// Issue a token for `user_id`, valid for the configured TTL from `now`
    pub fn issue(&self, user_id: i64, now: i64) -> IssuedToken {
        let expires_at = now.saturating_add(self.ttl_secs);
        let claims = format!("{}.{}", user_id, expires_at);
        let signature = sign_hmac(&claims, &self.secret);

        IssuedToken {
            token: format!("{}.{}", claims, signature),
            expires_at,
        }
    }

    /// Verify a token and return the user id it was issued for
    ///
    /// The signature is checked before the expiry so a forged token never
    /// reveals whether its timestamp would have been accepted.
    pub fn verify(&self, token: &str, now: i64) -> Result<i64, TokenError> {
        let (claims, signature) = token.rsplit_once('.').ok_or(TokenError::Malformed)?;
        let (user_id, expires_at) = claims.split_once('.').ok_or(TokenError::Malformed)?;

        let user_id: i64 = user_id.parse().map_err(|_| TokenError::Malformed)?;
        let expires_at: i64 = expires_at.parse().map_err(|_| TokenError::Malformed)?;

        if !verify_hmac(claims, signature, &self.secret) {
            return Err(TokenError::BadSignature);
        }

        if now >= expires_at {
            return Err(TokenError::Expired);
        }

        Ok(user_id)
    }
}
