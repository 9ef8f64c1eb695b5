//! Link shortening and expansion service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::ShortenError;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, derive_code};
use crate::utils::url_validator::validate_url;

/// Service for creating and resolving short codes.
///
/// Validates input, derives deterministic codes, and is the only path through
/// which handlers touch the mapping store.
///
/// # Idempotency
///
/// A URL that was already shortened returns its stored code without a write.
/// Two concurrent first-time calls for the same URL may both write, but both
/// write the identical pair, so the resulting state is the same.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    code_length: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a service producing codes of [`DEFAULT_CODE_LENGTH`] characters.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_code_length(link_repository, DEFAULT_CODE_LENGTH)
    }

    /// Creates a service producing codes of `code_length` characters.
    pub fn with_code_length(link_repository: Arc<L>, code_length: usize) -> Self {
        Self {
            link_repository,
            code_length,
        }
    }

    /// Configured short code length.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Returns the short code for `long_url`, creating the mapping on first use.
    ///
    /// The URL is stored and hashed exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::EmptyUrl`] for empty or whitespace-only input.
    /// Returns [`ShortenError::InvalidUrl`] if the input is not an absolute URL
    /// with a scheme and a host.
    pub fn shorten(&self, long_url: &str) -> Result<String, ShortenError> {
        validate_url(long_url)?;

        if let Some(existing) = self.link_repository.find_short_code(long_url) {
            debug!(code = %existing, "Existing mapping reused");
            return Ok(existing);
        }

        let code = derive_code(long_url, self.code_length);
        self.link_repository.store(&code, long_url);
        debug!(code = %code, "Mapping created");

        Ok(code)
    }

    /// Resolves `short_code` to the long URL it was created for.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::EmptyUrl`] for an empty or whitespace-only code.
    /// Returns [`ShortenError::NotFound`] if the code was never stored.
    pub fn expand(&self, short_code: &str) -> Result<String, ShortenError> {
        if short_code.trim().is_empty() {
            return Err(ShortenError::EmptyUrl);
        }

        self.link_repository.find_long_url(short_code)
    }

    /// Number of mappings held by the underlying store.
    pub fn mapping_count(&self) -> usize {
        self.link_repository.len()
    }
}
