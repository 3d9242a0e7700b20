use serde::{Deserialize, Serialize};

use crate::constants::{
    ERR_INVALID_EMAIL, ERR_INVALID_PASSWORD, MAX_EMAIL_LENGTH, MAX_PASSWORD_BYTES,
};
use crate::error::{AppError, Result};

/// User row as stored in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    /// Argon2id PHC string, never leaves the server
    pub password_hash: String,
}

/// User model for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
}

impl From<UserRecord> for PublicUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
        }
    }
}

/// Email + password body shared by register and login
#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Check email and password format, returning the trimmed email
    pub fn validate(&self) -> Result<&str> {
        let email = self.email.trim();
        if !validate_email(email) {
            return Err(AppError::InvalidInput(ERR_INVALID_EMAIL.to_string()));
        }

        if !validate_password(&self.password) {
            return Err(AppError::InvalidInput(ERR_INVALID_PASSWORD.to_string()));
        }

        Ok(email)
    }
}

/// Syntactic email check: `local@domain.tld`, no whitespace, bounded length
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs at least two non-empty labels
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}

/// Password must be non-empty and at most `MAX_PASSWORD_BYTES`
pub fn validate_password(password: &str) -> bool {
    !password.is_empty() && password.len() <= MAX_PASSWORD_BYTES
}
