//! Domain layer containing the mapping contract and error kinds.
//!
//! Nothing here knows about HTTP or about how mappings are held in memory.
//!
//! # Architecture
//!
//! - [`errors`] - Error kinds returned by the store and the shortening service
//! - [`repositories`] - Mapping store trait definition
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod errors;
pub mod repositories;

pub use errors::ShortenError;
