//! Long URL validation.
//!
//! Only syntax is checked. The input string itself is what gets hashed and
//! stored, so nothing here rewrites or normalizes it.

use url::Url;

use crate::domain::errors::ShortenError;

/// Checks that `input` is a non-empty absolute URL with a scheme and a host.
///
/// # Errors
///
/// Returns [`ShortenError::EmptyUrl`] for empty or whitespace-only input.
///
/// Returns [`ShortenError::InvalidUrl`] if:
/// - the parser rejects the input (`example.com`, `://missing-scheme.com`, `http://`)
/// - the URL has no host (`mailto:someone@example.com`, `file:///etc/hosts`)
/// - the input carries leading or trailing whitespace
/// - the input contains an ASCII control character
/// - the scheme is not followed by `://` (`http:example.com`)
///
/// # Examples
///
/// ```
/// use hash_shortener::domain::ShortenError;
/// use hash_shortener::utils::url_validator::validate_url;
///
/// assert!(validate_url("https://example.com/path").is_ok());
/// assert_eq!(validate_url("   "), Err(ShortenError::EmptyUrl));
/// assert_eq!(validate_url("example.com"), Err(ShortenError::InvalidUrl));
/// ```
pub fn validate_url(input: &str) -> Result<(), ShortenError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ShortenError::EmptyUrl);
    }

    // The parser strips surrounding whitespace on its own, which would let two
    // different stored keys describe the same URL.
    if trimmed.len() != input.len() {
        return Err(ShortenError::InvalidUrl);
    }

    // The parser drops embedded tabs and newlines, and such bytes cannot be
    // sent back in a `Location` header.
    if input.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return Err(ShortenError::InvalidUrl);
    }

    let url = Url::parse(input).map_err(|_| ShortenError::InvalidUrl)?;

    let has_host = url.host_str().is_some_and(|host| !host.is_empty());
    if url.scheme().is_empty() || !has_host {
        return Err(ShortenError::InvalidUrl);
    }

    // Special schemes get a host even without `//` (`http:example.com`).
    let has_authority = input
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));
    if !has_authority {
        return Err(ShortenError::InvalidUrl);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_with_path_query_fragment() {
        assert!(validate_url("https://www.example.com/a/b?q=rust&lang=en#top").is_ok());
    }

    #[test]
    fn test_validate_non_http_scheme_with_host() {
        assert!(validate_url("ftp://files.example.com/file.txt").is_ok());
    }

    #[test]
    fn test_validate_ip_and_port() {
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        assert_eq!(validate_url(""), Err(ShortenError::EmptyUrl));
    }

    #[test]
    fn test_validate_whitespace_only() {
        assert_eq!(validate_url("   "), Err(ShortenError::EmptyUrl));
        assert_eq!(validate_url("\t\n"), Err(ShortenError::EmptyUrl));
    }

    #[test]
    fn test_validate_no_scheme() {
        assert_eq!(validate_url("example.com"), Err(ShortenError::InvalidUrl));
        assert_eq!(
            validate_url("not-a-valid-url"),
            Err(ShortenError::InvalidUrl)
        );
    }

    #[test]
    fn test_validate_missing_scheme_before_separator() {
        assert_eq!(
            validate_url("://missing-scheme.com"),
            Err(ShortenError::InvalidUrl)
        );
    }

    #[test]
    fn test_validate_no_host() {
        assert_eq!(validate_url("http://"), Err(ShortenError::InvalidUrl));
        assert_eq!(
            validate_url("mailto:test@example.com"),
            Err(ShortenError::InvalidUrl)
        );
        assert_eq!(
            validate_url("file:///home/user/document.txt"),
            Err(ShortenError::InvalidUrl)
        );
        assert_eq!(
            validate_url("http:example.com"),
            Err(ShortenError::InvalidUrl)
        );
        assert_eq!(
            validate_url("http:/example.com"),
            Err(ShortenError::InvalidUrl)
        );
        assert_eq!(
            validate_url("https:\\\\example.com"),
            Err(ShortenError::InvalidUrl)
        );
    }

    #[test]
    fn test_validate_control_characters() {
        assert_eq!(
            validate_url("https://example.com/a\nb"),
            Err(ShortenError::InvalidUrl)
        );
        assert_eq!(
            validate_url("http://exa\tmple.com/"),
            Err(ShortenError::InvalidUrl)
        );
        assert_eq!(
            validate_url("https://example.com/\u{7f}"),
            Err(ShortenError::InvalidUrl)
        );
        assert_eq!(
            validate_url("https://example.com/\r"),
            Err(ShortenError::InvalidUrl)
        );
    }

    #[test]
    fn test_validate_uppercase_scheme() {
        assert!(validate_url("HTTPS://Example.com/Path").is_ok());
    }

    #[test]
    fn test_validate_surrounding_whitespace() {
        assert_eq!(
            validate_url(" https://example.com"),
            Err(ShortenError::InvalidUrl)
        );
        assert_eq!(
            validate_url("https://example.com\n"),
            Err(ShortenError::InvalidUrl)
        );
    }

    #[test]
    fn test_validate_very_long_url() {
        let url = format!("https://example.com/{}", "a".repeat(2000));
        assert!(validate_url(&url).is_ok());
    }
}
