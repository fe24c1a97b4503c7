//! Human-readable metadata describing the registry itself

use std::collections::BTreeMap;

/// Metadata key for the registry name
pub const NAME_KEY: &str = "name";

/// Metadata key for the registry description
pub const DESCRIPTION_KEY: &str = "description";

/// Default registry name
pub const DEFAULT_NAME: &str = "Proof of Knowledge";

/// Default registry description
pub const DEFAULT_DESCRIPTION: &str =
    "Prove you knew of a file or hashable object. Optionally claim origination, copyright, etc.";

/// Fixed string map exposed for discovery by external tooling
///
/// Written once when a registry is created and never changed by claim
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMetadata {
    entries: BTreeMap<String, String>,
}

impl RegistryMetadata {
    /// Metadata with just a name and description
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(NAME_KEY.to_string(), name.into());
        entries.insert(DESCRIPTION_KEY.to_string(), description.into());
        Self { entries }
    }

    /// Build from arbitrary entries (storage layer deserialization)
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Registry name, if present
    pub fn name(&self) -> Option<&str> {
        self.get(NAME_KEY)
    }

    /// Registry description, if present
    pub fn description(&self) -> Option<&str> {
        self.get(DESCRIPTION_KEY)
    }

    /// Look up any entry
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RegistryMetadata {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_DESCRIPTION)
    }
}
