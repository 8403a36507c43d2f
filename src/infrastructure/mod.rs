//! Infrastructure layer for external integrations.
//!
//! Implements the store contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Redis and in-memory key-value store implementations

pub mod persistence;
