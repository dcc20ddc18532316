//! Test Utilities for the contract claims system
//!
//! Provides in-memory implementations of the storage ports, builders for
//! constructing test payloads with sensible defaults, and pre-built fixtures
//! for common scenarios.

pub mod builders;
pub mod fixtures;
pub mod memory;

pub use builders::NewClaimBuilder;
pub use fixtures::{ClaimFixtures, UploadFixtures};
pub use memory::{InMemoryBlobStore, InMemoryClaimStore};
