//! Blob Storage Infrastructure
//!
//! Local-filesystem adapter for the `domain_claims::BlobStore` port. The
//! engine generates collision-resistant storage names; this crate only
//! validates them and writes the bytes.

pub mod local;

pub use local::{LocalBlobStore, StorageConfig};
