//! Pure helpers behind alias generation and expiry handling.
//!
//! - [`alias_encoder`] - Deterministic SHA-256 -> base62 alias encoding
//! - [`ttl`] - TTL validation and expiry computation
//! - [`clock`] - Injectable time source

pub mod alias_encoder;
pub mod clock;
pub mod ttl;
