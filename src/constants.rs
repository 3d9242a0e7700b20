/// Maximum request body / stored document size in bytes (5MB)
/// Full learning progress for all units is well under 500KB
pub const MAX_DOCUMENT_SIZE_BYTES: usize = 5_242_880;

/// Warning threshold for large documents (1MB)
/// Log when documents exceed this size for monitoring
pub const WARN_DOCUMENT_SIZE_BYTES: usize = 1_048_576;

/// Maximum accepted password length in bytes
/// Bounds the Argon2 input so login cannot be used to burn CPU
pub const MAX_PASSWORD_BYTES: usize = 1024;

/// Maximum email length (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Default access token lifetime in seconds (7 days)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 604_800;

/// Minimum accepted length of the token signing secret
pub const MIN_TOKEN_SECRET_BYTES: usize = 16;

/// Token type reported by the login endpoint
pub const TOKEN_TYPE: &str = "bearer";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a malformed email address
pub const ERR_INVALID_EMAIL: &str = "Invalid email address";

/// Error message for an empty or oversized password
pub const ERR_INVALID_PASSWORD: &str = "Password must be between 1 and 1024 bytes";

/// Error message for blob bodies that are valid JSON but not an object
pub const ERR_DOCUMENT_NOT_OBJECT: &str = "Document must be a JSON object";

/// Login failure message, identical for unknown email and wrong password
pub const ERR_INVALID_CREDENTIALS: &str = "Incorrect email or password";

/// Message for missing, malformed or expired bearer tokens
pub const ERR_UNAUTHENTICATED: &str = "Could not validate credentials";
