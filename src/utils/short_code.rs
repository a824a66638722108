//! Short-link code generation.
//!
//! Codes are minted once per recipe at creation time; uniqueness against
//! existing codes is checked by the caller, which retries on collision.

use base64::Engine as _;

/// Length of random bytes before base64 encoding. Six bytes encode to an
/// eight-character code, well inside the column width.
const CODE_LENGTH_BYTES: usize = 6;

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_short_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
