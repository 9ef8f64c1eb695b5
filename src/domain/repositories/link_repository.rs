//! Repository trait for the bidirectional URL mapping store.

use crate::domain::errors::ShortenError;

/// Store holding `long URL -> short code` and `short code -> long URL`.
///
/// Implementations keep both directions consistent: a pair written by
/// [`store`](Self::store) becomes visible in both directions at once, and
/// readers never observe only one half of it.
///
/// The store trusts its caller and performs no validation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - lock-guarded hash maps
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkRepository: Send + Sync {
    /// Inserts both directions of the mapping as one atomic unit.
    ///
    /// Writing an existing pair again leaves the store unchanged.
    fn store(&self, short_code: &str, long_url: &str);

    /// Looks up the short code previously stored for `long_url`.
    ///
    /// The match is byte-for-byte. Returns `None` when absent.
    fn find_short_code(&self, long_url: &str) -> Option<String>;

    /// Looks up the long URL stored for `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if the code was never stored.
    fn find_long_url(&self, short_code: &str) -> Result<String, ShortenError>;

    /// Number of short codes currently held.
    fn len(&self) -> usize;

    /// Returns `true` when nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
