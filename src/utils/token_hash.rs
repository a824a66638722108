//! Keyed hashing of API tokens.
//!
//! Tokens are stored as HMAC-SHA256 MACs keyed by the server signing
//! secret. An attacker with read-only access to the database cannot
//! verify or forge tokens without the secret. The auth service and the
//! operator CLI share this function so both sides agree on the hash.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Hashes a raw token with HMAC-SHA256 under `signing_secret`.
///
/// Returns a 64-character lowercase hex-encoded MAC.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let hash1 = hash_token("secret", "token");
        let hash2 = hash_token("secret", "token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_hash_is_lowercase_hex() {
        let hash = hash_token("secret", "token");

        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, hash.to_lowercase());
    }

    #[test]
    fn test_different_tokens_differ() {
        assert_ne!(hash_token("secret", "token1"), hash_token("secret", "token2"));
    }

    #[test]
    fn test_secret_matters() {
        assert_ne!(hash_token("secret-a", "token"), hash_token("secret-b", "token"));
    }
}
