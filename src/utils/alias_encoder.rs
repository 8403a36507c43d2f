//! Deterministic alias encoding.
//!
//! An alias is the SHA-256 digest of the URL, reduced modulo 10^12 and written
//! in base 62 with a fixed alphabet. The same URL always maps to the same
//! alias; no randomness and no collision detection are involved.

use crate::error::AppError;
use serde_json::json;
use sha2::{Digest, Sha256};

/// Characters used for base-62 digits, indexed by digit value.
///
/// This string has 61 characters (there is no `'7'`). It must stay
/// byte-identical so that previously issued aliases keep resolving.
pub const ALPHABET: &[u8] = b"012345689abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Positional radix of the encoding.
pub const RADIX: u64 = 62;

/// Digest values are reduced modulo this bound before encoding.
pub const DIGEST_MODULUS: u64 = 1_000_000_000_000;

/// Hashes `url` with SHA-256 and reduces the big-endian digest modulo 10^12.
pub fn reduce_digest(url: &str) -> u64 {
    let digest = Sha256::digest(url.as_bytes());
    let modulus = u128::from(DIGEST_MODULUS);

    let reduced = digest
        .iter()
        .fold(0u128, |acc, &byte| ((acc << 8) | u128::from(byte)) % modulus);

    reduced as u64
}

/// Encodes `value` in base 62 using [`ALPHABET`].
///
/// Zero encodes to the empty string.
///
/// # Errors
///
/// Returns [`AppError::Encoding`] if a digit has no character in the
/// alphabet (digit 61).
pub fn to_base62(value: u64) -> Result<String, AppError> {
    let mut digits = Vec::new();
    let mut remaining = value;

    while remaining > 0 {
        let digit = (remaining % RADIX) as usize;
        let ch = ALPHABET.get(digit).ok_or_else(|| {
            AppError::encoding(
                "Digest digit has no alias character",
                json!({ "value": value, "digit": digit }),
            )
        })?;
        digits.push(*ch);
        remaining /= RADIX;
    }

    digits.reverse();
    // ALPHABET is ASCII
    Ok(digits.into_iter().map(char::from).collect())
}

/// Computes the alias for `url`.
///
/// # Errors
///
/// See [`to_base62`].
///
/// # Examples
///
/// ```
/// use ttl_shortener::utils::alias_encoder::encode_alias;
///
/// let alias = encode_alias("https://example.com").unwrap();
/// assert_eq!(alias, "1xCrcw");
/// ```
pub fn encode_alias(url: &str) -> Result<String, AppError> {
    to_base62(reduce_digest(url))
}
