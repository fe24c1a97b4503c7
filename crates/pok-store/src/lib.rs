//! Proof of Knowledge Storage Layer
//!
//! Implements the ClaimStore trait twice:
//!
//! - [`SqliteStore`]: durable storage in a SQLite database, surviving restarts
//! - [`MemoryStore`]: in-process maps, for tests and embedders
//!
//! Both keep the live claim mapping and an append-only journal of accepted
//! mutations, updated together.
//!
//! # Examples
//!
//! ```no_run
//! use pok_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for claim operations
//! ```

#![warn(missing_docs)]

mod memory;

pub use memory::MemoryStore;

use pok_domain::traits::{ClaimQuery, ClaimStore};
use pok_domain::{
    Claim, ClaimKey, ClaimRecord, EntryId, JournalEntry, Operation, RegistryMetadata,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Current timestamp in seconds since Unix epoch
pub(crate) fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// SQLite-based implementation of ClaimStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a SqliteStore at the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pok_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("registry.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Convert EntryId to bytes for storage
    fn entry_id_to_bytes(id: EntryId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to EntryId
    fn bytes_to_entry_id(bytes: &[u8]) -> Result<EntryId, StoreError> {
        if bytes.len() != 16 {
            return Err(StoreError::InvalidData(format!(
                "Expected 16 bytes for EntryId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(EntryId::from_value(u128::from_be_bytes(arr)))
    }

    /// Map a `claims` row (claimant, digest, flags..., message, on_behalf_of)
    fn row_to_claim(row: &Row<'_>) -> rusqlite::Result<Claim> {
        let key = ClaimKey::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?);
        let record = ClaimRecord {
            claims_origination: row.get(2)?,
            claims_copyright: row.get(3)?,
            claims_innovation: row.get(4)?,
            message: row.get(5)?,
            on_behalf_of: row.get(6)?,
        };
        Ok(Claim::new(key, record))
    }

    /// Map a `claim_journal` row
    fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<JournalEntry> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_entry_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        let op_str: String = row.get(1)?;
        let operation = Operation::parse(&op_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                Box::new(StoreError::InvalidData(format!("Unknown operation: {}", op_str))),
            )
        })?;

        let key = ClaimKey::new(row.get::<_, String>(2)?, row.get::<_, String>(3)?);

        let record = match operation {
            Operation::Upsert => Some(ClaimRecord {
                claims_origination: row.get(4)?,
                claims_copyright: row.get(5)?,
                claims_innovation: row.get(6)?,
                message: row.get(7)?,
                on_behalf_of: row.get(8)?,
            }),
            Operation::Withdraw => None,
        };

        Ok(JournalEntry {
            id,
            operation,
            key,
            record,
            recorded_at: row.get::<_, i64>(9)? as u64,
        })
    }

    /// Append a journal row inside an open transaction
    fn append_journal(
        tx: &rusqlite::Transaction<'_>,
        entry: &JournalEntry,
    ) -> Result<(), StoreError> {
        let record = entry.record.as_ref();
        tx.execute(
            "INSERT INTO claim_journal (id, operation, claimant, digest, claims_origination,
             claims_copyright, claims_innovation, message, on_behalf_of, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                Self::entry_id_to_bytes(entry.id),
                entry.operation.as_str(),
                entry.key.claimant.as_str(),
                entry.key.digest.as_str(),
                record.map(|r| r.claims_origination),
                record.map(|r| r.claims_copyright),
                record.map(|r| r.claims_innovation),
                record.and_then(|r| r.message.as_deref()),
                record.and_then(|r| r.on_behalf_of.as_deref()),
                entry.recorded_at as i64,
            ],
        )?;
        Ok(())
    }

    /// Build the WHERE clause shared by claim and journal queries
    fn filter_clause(query: &ClaimQuery) -> (String, Vec<String>) {
        let mut sql = String::from(" WHERE 1=1");
        let mut params = Vec::new();

        if let Some(claimant) = &query.claimant {
            sql.push_str(" AND claimant = ?");
            params.push(claimant.as_str().to_string());
        }

        if let Some(digest) = &query.digest {
            sql.push_str(" AND digest = ?");
            params.push(digest.as_str().to_string());
        }

        (sql, params)
    }
}

impl ClaimStore for SqliteStore {
    type Error = StoreError;

    fn put_claim(&mut self, key: &ClaimKey, record: &ClaimRecord) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;

        // Every column is overwritten on conflict: replace, never merge
        tx.execute(
            "INSERT INTO claims (claimant, digest, claims_origination, claims_copyright,
             claims_innovation, message, on_behalf_of)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(claimant, digest) DO UPDATE SET
             claims_origination = excluded.claims_origination,
             claims_copyright = excluded.claims_copyright,
             claims_innovation = excluded.claims_innovation,
             message = excluded.message,
             on_behalf_of = excluded.on_behalf_of",
            params![
                key.claimant.as_str(),
                key.digest.as_str(),
                record.claims_origination,
                record.claims_copyright,
                record.claims_innovation,
                record.message,
                record.on_behalf_of,
            ],
        )?;

        let entry = JournalEntry::upsert(key.clone(), record.clone(), current_timestamp());
        Self::append_journal(&tx, &entry)?;

        tx.commit()?;
        Ok(())
    }

    fn remove_claim(&mut self, key: &ClaimKey) -> Result<bool, Self::Error> {
        let tx = self.conn.transaction()?;

        let removed = tx.execute(
            "DELETE FROM claims WHERE claimant = ?1 AND digest = ?2",
            params![key.claimant.as_str(), key.digest.as_str()],
        )?;

        let entry = JournalEntry::withdraw(key.clone(), current_timestamp());
        Self::append_journal(&tx, &entry)?;

        tx.commit()?;
        Ok(removed > 0)
    }

    fn get_claim(&self, key: &ClaimKey) -> Result<Option<ClaimRecord>, Self::Error> {
        let claim = self
            .conn
            .query_row(
                "SELECT claimant, digest, claims_origination, claims_copyright, claims_innovation,
                 message, on_behalf_of
                 FROM claims WHERE claimant = ?1 AND digest = ?2",
                params![key.claimant.as_str(), key.digest.as_str()],
                Self::row_to_claim,
            )
            .optional()?;

        Ok(claim.map(|c| c.record))
    }

    fn query_claims(&self, query: &ClaimQuery) -> Result<Vec<Claim>, Self::Error> {
        let (filter, filter_params) = Self::filter_clause(query);
        let mut sql = format!(
            "SELECT claimant, digest, claims_origination, claims_copyright, claims_innovation,
             message, on_behalf_of
             FROM claims{} ORDER BY claimant, digest",
            filter
        );

        let mut params: Vec<Box<dyn rusqlite::ToSql>> = filter_params
            .into_iter()
            .map(|p| Box::new(p) as Box<dyn rusqlite::ToSql>)
            .collect();

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let claims = stmt
            .query_map(&param_refs[..], Self::row_to_claim)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(claims)
    }

    fn history(&self, query: &ClaimQuery) -> Result<Vec<JournalEntry>, Self::Error> {
        let (filter, filter_params) = Self::filter_clause(query);
        let columns = "seq, id, operation, claimant, digest, claims_origination, claims_copyright,
             claims_innovation, message, on_behalf_of, recorded_at";

        let mut params: Vec<Box<dyn rusqlite::ToSql>> = filter_params
            .into_iter()
            .map(|p| Box::new(p) as Box<dyn rusqlite::ToSql>)
            .collect();

        // A limit keeps the most recent entries, still returned oldest first
        let inner = match query.limit {
            Some(limit) => {
                params.push(Box::new(limit as i64));
                format!(
                    "SELECT {} FROM claim_journal{} ORDER BY seq DESC LIMIT ?",
                    columns, filter
                )
            }
            None => format!("SELECT {} FROM claim_journal{}", columns, filter),
        };
        let sql = format!(
            "SELECT id, operation, claimant, digest, claims_origination, claims_copyright,
             claims_innovation, message, on_behalf_of, recorded_at
             FROM ({}) ORDER BY seq ASC",
            inner
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let entries = stmt
            .query_map(&param_refs[..], Self::row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    fn metadata(&self) -> Result<Option<RegistryMetadata>, Self::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM registry_metadata ORDER BY key")?;

        let entries = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        if entries.is_empty() {
            return Ok(None);
        }

        Ok(Some(RegistryMetadata::from_entries(entries)))
    }

    fn init_metadata(&mut self, metadata: &RegistryMetadata) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;

        let existing: i64 =
            tx.query_row("SELECT COUNT(*) FROM registry_metadata", [], |row| row.get(0))?;

        if existing == 0 {
            for (key, value) in metadata.iter() {
                tx.execute(
                    "INSERT INTO registry_metadata (key, value) VALUES (?1, ?2)",
                    params![key, value],
                )?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}
