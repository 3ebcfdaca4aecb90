//! Shared-secret request digests.
//!
//! # Responsibilities
//! - Verify a client-supplied HMAC-SHA1 digest of a query term
//!
//! # Design Decisions
//! - Opt-in: handlers that want authentication call this explicitly;
//!   nothing in the dispatch path enforces it
//! - The comparison is constant-time

use std::fmt;

use ring::constant_time::verify_slices_are_equal;
use ring::hmac;

/// Check a client-supplied digest of a query term.
///
/// Computes HMAC-SHA1 over `query_term` with the shared `private_key`,
/// hex-encodes the result, and compares it with the claimed
/// `query_term_digest` in constant time.
pub fn digest_matches(private_key: &str, query_term: &str, query_term_digest: &str) -> bool {
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, private_key.as_bytes());
    let tag = hmac::sign(&key, query_term.as_bytes());
    let hex = DigestHex(tag.as_ref()).to_string();
    verify_slices_are_equal(hex.as_bytes(), query_term_digest.as_bytes()).is_ok()
}

/// Helper type to encode a digest as a sequence of hex digits.
struct DigestHex<'a>(&'a [u8]);

impl fmt::Display for DigestHex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &octet in self.0 {
            write!(f, "{:02x}", octet)?;
        }
        Ok(())
    }
}
