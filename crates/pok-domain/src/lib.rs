//! Proof of Knowledge Domain Layer
//!
//! This crate contains the data model for the claim registry: the keys and
//! records it holds, the per-call context it is given, and the trait seam to
//! the durable store that backs it.
//!
//! ## Key Concepts
//!
//! - **Claimant**: The authenticated identity making a claim
//! - **Digest**: An opaque string standing for a hash of an external artifact
//! - **Claim**: Origination, copyright and innovation flags plus optional notes,
//!   stored once per (claimant, digest)
//! - **Call context**: Caller identity and attached value for one call
//! - **Journal**: The store's audit trail of accepted mutations
//!
//! ## Architecture
//!
//! - Pure value types only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod context;
pub mod journal;
pub mod metadata;
pub mod traits;

// Re-exports for convenience
pub use claim::{Claim, ClaimKey, ClaimKind, ClaimRecord, Claimant, Digest};
pub use context::CallContext;
pub use journal::{EntryId, JournalEntry, Operation};
pub use metadata::RegistryMetadata;
