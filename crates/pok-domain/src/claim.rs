//! Claim module - keys and records held by the registry

use std::fmt;

/// Authenticated identity of the party making a claim
///
/// Opaque to the registry: typically an account address supplied by the
/// host environment. It is never parsed or validated here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Claimant(String);

impl Claimant {
    /// Wrap an identity value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw identity value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Claimant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Claimant {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Claimant {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// String-encoded digest of an externally held artifact
///
/// The registry performs no hashing and no format validation: any string,
/// including the empty string, is a valid digest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(String);

impl Digest {
    /// Wrap a digest token
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw digest token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Digest {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Digest {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifies one claim slot: at most one record exists per key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimKey {
    /// Who made the claim
    pub claimant: Claimant,

    /// What the claim is about
    pub digest: Digest,
}

impl ClaimKey {
    /// Build the key for a claimant and digest
    ///
    /// # Examples
    ///
    /// ```
    /// use pok_domain::ClaimKey;
    ///
    /// let key = ClaimKey::new("tz1alice", "3dc1115d");
    /// assert_eq!(key.claimant.as_str(), "tz1alice");
    /// assert_eq!(key.digest.as_str(), "3dc1115d");
    /// ```
    pub fn new(claimant: impl Into<Claimant>, digest: impl Into<Digest>) -> Self {
        Self {
            claimant: claimant.into(),
            digest: digest.into(),
        }
    }
}

impl fmt::Display for ClaimKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.claimant, self.digest)
    }
}

/// The kinds of assertion a claim can carry beyond plain knowledge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimKind {
    /// The claimant created the artifact
    Origination,

    /// The claimant holds copyright over the artifact
    Copyright,

    /// The claimant contributed novel ideas present in the artifact
    Innovation,
}

impl ClaimKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimKind::Origination => "origination",
            ClaimKind::Copyright => "copyright",
            ClaimKind::Innovation => "innovation",
        }
    }
}

/// Metadata stored for a claim
///
/// Upserts replace the whole record; fields are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimRecord {
    /// Claimant created the artifact
    pub claims_origination: bool,

    /// Claimant holds copyright over the artifact
    pub claims_copyright: bool,

    /// Claimant contributed novel ideas present in the artifact
    pub claims_innovation: bool,

    /// Free-text elaboration
    pub message: Option<String>,

    /// Unverified name of a third party the claimant represents
    pub on_behalf_of: Option<String>,
}

impl ClaimRecord {
    /// Create a record with the given assertion flags and no annotations
    pub fn new(claims_origination: bool, claims_copyright: bool, claims_innovation: bool) -> Self {
        Self {
            claims_origination,
            claims_copyright,
            claims_innovation,
            message: None,
            on_behalf_of: None,
        }
    }

    /// Attach a free-text message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the name of the represented party
    pub fn on_behalf_of(mut self, party: impl Into<String>) -> Self {
        self.on_behalf_of = Some(party.into());
        self
    }

    /// Assertions made by this record, in declaration order
    ///
    /// An empty list means the claimant only asserts knowledge of the artifact.
    pub fn assertions(&self) -> Vec<ClaimKind> {
        let mut kinds = Vec::with_capacity(3);
        if self.claims_origination {
            kinds.push(ClaimKind::Origination);
        }
        if self.claims_copyright {
            kinds.push(ClaimKind::Copyright);
        }
        if self.claims_innovation {
            kinds.push(ClaimKind::Innovation);
        }
        kinds
    }
}

/// A stored key/record pair, as returned by store queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// Claim slot
    pub key: ClaimKey,

    /// Current record at that slot
    pub record: ClaimRecord,
}

impl Claim {
    /// Pair a key with its record
    pub fn new(key: ClaimKey, record: ClaimRecord) -> Self {
        Self { key, record }
    }
}
