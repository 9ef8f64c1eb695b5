//! In-memory implementation of the link repository.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::errors::ShortenError;
use crate::domain::repositories::LinkRepository;

/// Both directions of the mapping, always mutated together.
#[derive(Debug, Default)]
struct Mappings {
    long_to_short: HashMap<String, String>,
    short_to_long: HashMap<String, String>,
}

/// Process-local store for URL mappings.
///
/// A single [`RwLock`] covers both maps so that a pair is either fully
/// visible or not visible at all. Lookups take the shared lock and may run in
/// parallel; [`store`](LinkRepository::store) takes the exclusive lock.
///
/// Instances are constructed explicitly and shared through `Arc`; there is no
/// process-wide store.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    mappings: RwLock<Mappings>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository with room for `capacity` mappings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mappings: RwLock::new(Mappings {
                long_to_short: HashMap::with_capacity(capacity),
                short_to_long: HashMap::with_capacity(capacity),
            }),
        }
    }
}

impl LinkRepository for InMemoryLinkRepository {
    fn store(&self, short_code: &str, long_url: &str) {
        let mut mappings = self.mappings.write();
        mappings
            .long_to_short
            .insert(long_url.to_owned(), short_code.to_owned());
        mappings
            .short_to_long
            .insert(short_code.to_owned(), long_url.to_owned());
    }

    fn find_short_code(&self, long_url: &str) -> Option<String> {
        self.mappings.read().long_to_short.get(long_url).cloned()
    }

    fn find_long_url(&self, short_code: &str) -> Result<String, ShortenError> {
        self.mappings
            .read()
            .short_to_long
            .get(short_code)
            .cloned()
            .ok_or(ShortenError::NotFound)
    }

    fn len(&self) -> usize {
        self.mappings.read().short_to_long.len()
    }
}
