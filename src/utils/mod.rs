//! Utility functions for code derivation and URL validation.
//!
//! - [`code_generator`] - Deterministic short code derivation
//! - [`url_validator`] - Long URL syntax checks

pub mod code_generator;
pub mod url_validator;
