//! Repository trait definitions for the domain layer.
//!
//! The mapping store is abstracted behind [`LinkRepository`] so the
//! shortening service can be tested against a mock and so the in-memory
//! implementation in `crate::infrastructure::persistence` stays swappable.
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` under `cfg(test)`.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
