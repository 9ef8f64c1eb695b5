//! # Hash Shortener
//!
//! A self-hosted URL shortening service built with Axum. Short codes are
//! derived from a SHA-256 digest of the long URL, so the same URL always gets
//! the same code without any coordination.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Error kinds and the mapping store trait
//! - **Application Layer** ([`application`]) - Validation, code derivation, idempotency
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory bidirectional store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export PORT=8080
//! export BASE_URL="http://localhost:8080"  # Optional
//!
//! cargo run
//!
//! curl -X POST localhost:8080/api/v1/shortURL -d '{"url":"https://www.example.com/test"}' \
//!      -H 'Content-Type: application/json'
//! ```
//!
//! ## Using the core directly
//!
//! ```
//! use std::sync::Arc;
//! use hash_shortener::prelude::*;
//!
//! let service = LinkService::new(Arc::new(InMemoryLinkRepository::new()));
//! let code = service.shorten("https://www.example.com/test").unwrap();
//! assert_eq!(service.expand(&code).unwrap(), "https://www.example.com/test");
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

/// Commonly used types.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::ShortenError;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
