//! Proof of Knowledge Registry
//!
//! Lets an actor assert, update or retract that it knew of (and optionally
//! originated, holds copyright over, or contributed ideas to) an externally
//! hashed artifact. Only the digest and the nature of the claim are stored.
//!
//! The registry provides:
//! - `upsert_claim`: create or fully replace the caller's claim on a digest
//! - `withdraw_claim`: remove the caller's claim on a digest (idempotent)
//! - Rejection of any call that carries value
//!
//! Reads are not part of the registry: audit through the backing store.
//!
//! # Examples
//!
//! ```no_run
//! use pok_domain::{CallContext, ClaimRecord};
//! use pok_registry::{ClaimRegistry, RegistryConfig};
//! use pok_store::SqliteStore;
//!
//! let store = SqliteStore::new("registry.db").unwrap();
//! let mut registry = ClaimRegistry::new(store, RegistryConfig::default()).unwrap();
//!
//! let ctx = CallContext::new("tz1alice");
//! registry.upsert_claim(&ctx, "3dc1115d", ClaimRecord::new(true, true, false)).unwrap();
//! registry.withdraw_claim(&ctx, "3dc1115d").unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod registry;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use registry::ClaimRegistry;
