//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry rejected the call
    #[error("Registry error [{code}]: {0}", code = .0.code())]
    Registry(#[from] pok_registry::RegistryError),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] pok_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pok_registry::RegistryError;

    #[test]
    fn test_registry_error_shows_code() {
        let err: CliError = RegistryError::InvalidAttachedValue { amount: 10 }.into();
        assert!(err.to_string().contains("NONZERO_AMOUNT"));
    }
}
