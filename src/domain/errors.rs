//! Error kinds produced by the mapping store and the shortening service.

/// Failure of a shorten or expand operation.
///
/// The `Display` text of each variant is the human-readable message sent to
/// HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    /// The input URL or short code was empty or whitespace-only.
    #[error("URL cannot be empty")]
    EmptyUrl,

    /// The input URL could not be parsed, or has no scheme or no host.
    #[error("invalid URL format")]
    InvalidUrl,

    /// No long URL is stored for the requested short code.
    #[error("short URL not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(ShortenError::EmptyUrl.to_string(), "URL cannot be empty");
        assert_eq!(ShortenError::InvalidUrl.to_string(), "invalid URL format");
        assert_eq!(ShortenError::NotFound.to_string(), "short URL not found");
    }
}
