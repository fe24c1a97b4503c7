//! In-process ClaimStore

use crate::{current_timestamp, StoreError};
use pok_domain::traits::{ClaimQuery, ClaimStore};
use pok_domain::{Claim, ClaimKey, ClaimRecord, JournalEntry, RegistryMetadata};
use std::collections::BTreeMap;

/// ClaimStore held entirely in memory
///
/// Same semantics as [`crate::SqliteStore`] without durability. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    claims: BTreeMap<ClaimKey, ClaimRecord>,
    journal: Vec<JournalEntry>,
    metadata: Option<RegistryMetadata>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live claims
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether no claims are stored
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Snapshot of the live mapping
    pub fn snapshot(&self) -> BTreeMap<ClaimKey, ClaimRecord> {
        self.claims.clone()
    }
}

impl ClaimStore for MemoryStore {
    type Error = StoreError;

    fn put_claim(&mut self, key: &ClaimKey, record: &ClaimRecord) -> Result<(), Self::Error> {
        self.claims.insert(key.clone(), record.clone());
        self.journal.push(JournalEntry::upsert(
            key.clone(),
            record.clone(),
            current_timestamp(),
        ));
        Ok(())
    }

    fn remove_claim(&mut self, key: &ClaimKey) -> Result<bool, Self::Error> {
        let removed = self.claims.remove(key).is_some();
        self.journal
            .push(JournalEntry::withdraw(key.clone(), current_timestamp()));
        Ok(removed)
    }

    fn get_claim(&self, key: &ClaimKey) -> Result<Option<ClaimRecord>, Self::Error> {
        Ok(self.claims.get(key).cloned())
    }

    fn query_claims(&self, query: &ClaimQuery) -> Result<Vec<Claim>, Self::Error> {
        let matching = self
            .claims
            .iter()
            .filter(|(key, _)| query.matches(key))
            .map(|(key, record)| Claim::new(key.clone(), record.clone()));

        Ok(match query.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }

    fn history(&self, query: &ClaimQuery) -> Result<Vec<JournalEntry>, Self::Error> {
        let matching: Vec<JournalEntry> = self
            .journal
            .iter()
            .filter(|entry| query.matches(&entry.key))
            .cloned()
            .collect();

        // Keep the most recent `limit` entries
        let skip = query
            .limit
            .map(|limit| matching.len().saturating_sub(limit))
            .unwrap_or(0);

        Ok(matching.into_iter().skip(skip).collect())
    }

    fn metadata(&self) -> Result<Option<RegistryMetadata>, Self::Error> {
        Ok(self.metadata.clone())
    }

    fn init_metadata(&mut self, metadata: &RegistryMetadata) -> Result<(), Self::Error> {
        if self.metadata.is_none() {
            self.metadata = Some(metadata.clone());
        }
        Ok(())
    }
}
