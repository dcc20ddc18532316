//! Core Kernel - Foundational types for the contract claims system
//!
//! This crate provides the fundamental building blocks used across the
//! workflow and infrastructure crates:
//! - Strongly-typed integer identifiers
//! - Port (hexagonal architecture) abstractions and their error type

pub mod identifiers;
pub mod ports;

pub use identifiers::{AttachmentId, ClaimId};
pub use ports::{DomainPort, PortError};
