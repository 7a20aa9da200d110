//! Short code derivation and format validation.
//!
//! Codes are derived from the target URL plus a fresh random salt, so
//! repeated calls for the same URL yield different candidates. Uniqueness
//! is NOT guaranteed here; the store's unique index is the authority and
//! callers retry with a new salt on conflict.

use base64::Engine as _;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

/// Length of a short code in characters.
pub const CODE_LENGTH: usize = 8;

/// Random salt length in bytes mixed into every digest.
const SALT_LENGTH_BYTES: usize = 16;

/// Compiled format check for inbound short codes.
static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{8}$").expect("valid short code regex"));

/// Derives an 8-character candidate code for a URL.
///
/// SHA-256 over the URL bytes concatenated with a 128-bit random salt,
/// encoded as URL-safe base64 without padding, truncated to
/// [`CODE_LENGTH`] characters. The derivation is non-reversible and
/// non-deterministic.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code("https://example.com");
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(url: &str) -> String {
    let mut salt = [0u8; SALT_LENGTH_BYTES];
    getrandom::fill(&mut salt).expect("Failed to generate random bytes");

    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(salt);
    let digest = hasher.finalize();

    let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest);

    // 32 digest bytes encode to 43 characters, always enough.
    encoded[..CODE_LENGTH].to_string()
}

/// Returns true if `code` matches the short code format
/// (`^[A-Za-z0-9_-]{8}$`).
pub fn is_valid_code(code: &str) -> bool {
    SHORT_CODE_REGEX.is_match(code)
}
