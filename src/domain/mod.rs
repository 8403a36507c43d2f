//! Domain layer containing the shortened-URL data model and store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Key-value store trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Concrete stores live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
