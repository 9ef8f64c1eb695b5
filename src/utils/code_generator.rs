//! Deterministic short code derivation.
//!
//! A short code is the SHA-256 digest of the long URL, encoded as URL-safe
//! base64 without padding and truncated to the configured length. The same
//! URL and length always give the same code, on any instance.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Length of a full unpadded base64 encoding of a SHA-256 digest.
pub const MAX_CODE_LENGTH: usize = 43;

/// Derives the short code for `long_url`.
///
/// Returns the full encoding when `length` exceeds [`MAX_CODE_LENGTH`].
///
/// # Examples
///
/// ```
/// use hash_shortener::utils::code_generator::derive_code;
///
/// let a = derive_code("https://example.com", 8);
/// let b = derive_code("https://example.com", 8);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 8);
/// ```
pub fn derive_code(long_url: &str, length: usize) -> String {
    let digest = Sha256::digest(long_url.as_bytes());
    let mut encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest);

    // Base64 output is ASCII, so byte truncation lands on a char boundary.
    encoded.truncate(length);
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_derive_code_default_length() {
        let code = derive_code("https://www.example.com/test", DEFAULT_CODE_LENGTH);
        assert_eq!(code.len(), 8);
    }

    #[test]
    fn test_derive_code_is_deterministic() {
        let first = derive_code("https://example.com/page", 8);
        let second = derive_code("https://example.com/page", 8);
        assert_eq!(first, second);
    }

    #[test]
    fn test_derive_code_known_value() {
        // SHA-256("") = e3b0c442...; URL-safe base64 starts with "47DEQpj8".
        assert_eq!(derive_code("", 8), "47DEQpj8");
    }

    #[test]
    fn test_derive_code_url_safe_characters() {
        for i in 0..500 {
            let code = derive_code(&format!("https://example.com/{}", i), 16);
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in {}",
                code
            );
        }
    }

    #[test]
    fn test_derive_code_no_padding() {
        let code = derive_code("https://example.com", 100);
        assert!(!code.contains('='));
    }

    #[test]
    fn test_derive_code_longer_than_digest_returns_full_encoding() {
        let code = derive_code("https://example.com", 100);
        assert_eq!(code.len(), MAX_CODE_LENGTH);
    }

    #[test]
    fn test_derive_code_shorter_length_is_prefix() {
        let long = derive_code("https://example.com", 16);
        let short = derive_code("https://example.com", 6);
        assert!(long.starts_with(&short));
    }

    #[test]
    fn test_derive_code_distinct_urls_distinct_codes() {
        let mut codes = HashSet::new();

        for i in 0..1000 {
            codes.insert(derive_code(&format!("https://example.com/item/{}", i), 8));
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_derive_code_is_case_sensitive() {
        assert_ne!(
            derive_code("https://example.com/Path", 8),
            derive_code("https://example.com/path", 8)
        );
    }
}
