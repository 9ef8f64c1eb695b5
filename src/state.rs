//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Link service backed by the in-memory store.
pub type MemoryLinkService = LinkService<InMemoryLinkRepository>;

/// State cloned into every request.
///
/// Holds the one service instance for this server; tests build their own.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<MemoryLinkService>,
    /// Prefix for generated short URLs, without a trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    /// Creates state around an existing service.
    ///
    /// Trailing slashes on `base_url` are trimmed.
    pub fn new(link_service: Arc<MemoryLinkService>, base_url: &str) -> Self {
        Self {
            link_service,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Creates state with a fresh, empty store.
    pub fn with_code_length(base_url: &str, code_length: usize) -> Self {
        let repository = Arc::new(InMemoryLinkRepository::new());
        let service = Arc::new(LinkService::with_code_length(repository, code_length));
        Self::new(service, base_url)
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
