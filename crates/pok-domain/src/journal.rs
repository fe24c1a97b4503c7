//! Journal of accepted mutations kept by the persistence layer
//!
//! The live mapping forgets withdrawn claims; the journal does not. It is the
//! store's own audit trail and gives every accepted call a place in record
//! order.

use crate::claim::{ClaimKey, ClaimRecord};
use std::fmt;

/// Unique identifier for a journal entry based on UUIDv7
///
/// UUIDv7 sorts chronologically, so entry ids follow record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u128);

impl EntryId {
    /// Generate a new UUIDv7-based EntryId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an EntryId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Milliseconds since Unix epoch embedded in the UUIDv7
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Mutation kind recorded in the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create-or-replace of a claim
    Upsert,

    /// Withdrawal of a claim (recorded even when nothing was stored)
    Withdraw,
}

impl Operation {
    /// Get the operation name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Upsert => "upsert",
            Operation::Withdraw => "withdraw",
        }
    }

    /// Parse an operation name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "upsert" => Some(Operation::Upsert),
            "withdraw" => Some(Operation::Withdraw),
            _ => None,
        }
    }
}

/// One accepted mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// Entry identifier
    pub id: EntryId,

    /// What happened
    pub operation: Operation,

    /// Which claim slot it happened to
    pub key: ClaimKey,

    /// Record written by an upsert; `None` for withdrawals
    pub record: Option<ClaimRecord>,

    /// Seconds since Unix epoch when the store applied the mutation
    pub recorded_at: u64,
}

impl JournalEntry {
    /// Journal an upsert
    pub fn upsert(key: ClaimKey, record: ClaimRecord, recorded_at: u64) -> Self {
        Self {
            id: EntryId::new(),
            operation: Operation::Upsert,
            key,
            record: Some(record),
            recorded_at,
        }
    }

    /// Journal a withdrawal
    pub fn withdraw(key: ClaimKey, recorded_at: u64) -> Self {
        Self {
            id: EntryId::new(),
            operation: Operation::Withdraw,
            key,
            record: None,
            recorded_at,
        }
    }
}
