//! Registry error types

use thiserror::Error;

/// Errors that can occur during registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The call carried a non-zero attached value
    #[error("Invalid attached value: {amount} (claims must carry zero value)")]
    InvalidAttachedValue {
        /// Amount that was attached
        amount: u64,
    },

    /// Store error while reading or writing the mapping
    #[error("Store error: {0}")]
    Store(String),
}

impl RegistryError {
    /// Stable rejection code reported to callers
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::InvalidAttachedValue { .. } => "NONZERO_AMOUNT",
            RegistryError::Store(_) => "STORE_FAILURE",
        }
    }
}
