//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Claim, ClaimKey, ClaimRecord, Claimant, Digest, JournalEntry, RegistryMetadata};

/// Durable key-value store backing the claim mapping
///
/// Implemented by the infrastructure layer (pok-store). Every mutation is
/// applied atomically together with its journal entry.
pub trait ClaimStore {
    /// Error type for store operations
    type Error;

    /// Create or fully replace the record at `key`
    fn put_claim(&mut self, key: &ClaimKey, record: &ClaimRecord) -> Result<(), Self::Error>;

    /// Delete the record at `key`, returning whether one was present
    ///
    /// Deleting an absent key is not an error.
    fn remove_claim(&mut self, key: &ClaimKey) -> Result<bool, Self::Error>;

    /// Look up the record at `key`
    fn get_claim(&self, key: &ClaimKey) -> Result<Option<ClaimRecord>, Self::Error>;

    /// Live claims matching the query, ordered by claimant then digest
    fn query_claims(&self, query: &ClaimQuery) -> Result<Vec<Claim>, Self::Error>;

    /// Journal entries matching the query, in record order
    ///
    /// A limit keeps the most recent entries.
    fn history(&self, query: &ClaimQuery) -> Result<Vec<JournalEntry>, Self::Error>;

    /// Registry metadata, if it has been written
    fn metadata(&self) -> Result<Option<RegistryMetadata>, Self::Error>;

    /// Write registry metadata unless some already exists
    fn init_metadata(&mut self, metadata: &RegistryMetadata) -> Result<(), Self::Error>;
}

/// Query criteria for audit reads
#[derive(Debug, Clone, Default)]
pub struct ClaimQuery {
    /// Filter by claimant
    pub claimant: Option<Claimant>,

    /// Filter by digest
    pub digest: Option<Digest>,

    /// Maximum results to return
    pub limit: Option<usize>,
}

impl ClaimQuery {
    /// Query for everything a claimant has on record
    pub fn by_claimant(claimant: impl Into<Claimant>) -> Self {
        Self {
            claimant: Some(claimant.into()),
            ..Default::default()
        }
    }

    /// Query for every claim on a digest, across claimants
    pub fn by_digest(digest: impl Into<Digest>) -> Self {
        Self {
            digest: Some(digest.into()),
            ..Default::default()
        }
    }

    /// Whether `key` passes the claimant and digest filters
    pub fn matches(&self, key: &ClaimKey) -> bool {
        self.claimant.as_ref().is_none_or(|c| *c == key.claimant)
            && self.digest.as_ref().is_none_or(|d| *d == key.digest)
    }
}
