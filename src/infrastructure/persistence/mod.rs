//! Mapping store implementations.
//!
//! Mappings live in process memory only and are discarded on restart.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Bidirectional mapping behind a single reader/writer lock

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
