//! Infrastructure layer implementing the domain contracts.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory mapping store

pub mod persistence;
