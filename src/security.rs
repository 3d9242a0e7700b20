use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::OnceLock;

type HmacSha256 = Hmac<Sha256>;

// =============================================================================
// Password Hashing
// =============================================================================

/// Hash a password using Argon2id with a fresh random salt
///
/// Returns the PHC string (`$argon2id$v=19$...`), which embeds the algorithm,
/// parameters and salt so verification needs nothing else.
///
/// This is CPU heavy; async callers should run it on `spawn_blocking`.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| format!("Password hashing failed: {}", e))
}

/// Verify a password against a stored PHC hash
///
/// The digest comparison inside `argon2` is constant-time. A stored hash that
/// cannot be parsed is treated as a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let parsed = match PasswordHash::new(password_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!("Stored password hash is not a valid PHC string: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Burn one Argon2 verification against a throwaway hash
///
/// Login calls this when the email is unknown so that path costs the same
/// as a wrong password.
pub fn dummy_verify(password: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let hash = DUMMY_HASH.get_or_init(|| hash_password("timing-equalizer").ok());
    if let Some(hash) = hash {
        let _ = verify_password(password, hash);
    }
}

// =============================================================================
// HMAC Signatures
// =============================================================================

/// Compute a hex-encoded HMAC-SHA256 signature of `data`
pub fn sign_hmac(data: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(data.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a hex-encoded HMAC-SHA256 signature
///
/// Comparison is constant-time (`Mac::verify_slice`).
pub fn verify_hmac(data: &str, signature: &str, secret: &str) -> bool {
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            tracing::error!("Failed to create HMAC instance");
            return false;
        }
    };

    mac.update(data.as_bytes());

    let sig_bytes = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::debug!("Invalid hex signature format");
            return false;
        }
    };

    mac.verify_slice(&sig_bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Password Tests
    // =========================================================================

    #[test]
    fn test_hash_password_is_phc_argon2id() {
        let hash = hash_password("hola-mundo").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("hola-mundo"));
    }

    #[test]
    fn test_hash_password_is_salted() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();

        // Fresh salt each time
        assert_ne!(first, second);
        assert!(verify_password("same-password", &first));
        assert!(verify_password("same-password", &second));
    }

    #[test]
    fn test_verify_password_wrong() {
        let hash = hash_password("correct horse").unwrap();
        assert!(!verify_password("battery staple", &hash));
    }

    #[test]
    fn test_verify_password_garbage_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    // =========================================================================
    // HMAC Tests
    // =========================================================================

    #[test]
    fn test_verify_hmac_valid() {
        let secret = "test-secret-key";
        let signature = sign_hmac("42.1700000000", secret);

        assert_eq!(signature.len(), 64);
        assert!(verify_hmac("42.1700000000", &signature, secret));
    }

    #[test]
    fn test_verify_hmac_invalid_signature() {
        let wrong_signature = "0".repeat(64);
        assert!(!verify_hmac("test data", &wrong_signature, "test-secret-key"));
    }

    #[test]
    fn test_verify_hmac_wrong_secret() {
        let signature = sign_hmac("test data", "test-secret-key");
        assert!(!verify_hmac("test data", &signature, "wrong-secret"));
    }

    #[test]
    fn test_verify_hmac_non_hex() {
        assert!(!verify_hmac("test data", "zz-not-hex", "test-secret-key"));
    }
}
