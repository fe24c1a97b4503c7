//! Registry configuration

use pok_domain::metadata::{DEFAULT_DESCRIPTION, DEFAULT_NAME};
use pok_domain::RegistryMetadata;
use serde::{Deserialize, Serialize};

/// Configuration applied when a registry is first created
///
/// Only used against an empty store. A store that already carries metadata
/// keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Human-readable registry name
    #[serde(default = "default_name")]
    pub name: String,

    /// Human-readable registry description
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
        }
    }
}

impl RegistryConfig {
    /// Metadata to write at origination
    pub fn to_metadata(&self) -> RegistryMetadata {
        RegistryMetadata::new(self.name.clone(), self.description.clone())
    }
}
