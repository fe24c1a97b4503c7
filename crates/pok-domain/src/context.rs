//! Per-call context supplied by the host environment

use crate::claim::{ClaimKey, Claimant, Digest};

/// Context of a single registry call
///
/// The host authenticates the claimant and reports the value attached to the
/// call. The registry trusts both completely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    /// Authenticated caller identity
    pub claimant: Claimant,

    /// Value attached to the call, in the host's smallest unit
    pub attached_value: u64,
}

impl CallContext {
    /// Context for a call with nothing attached
    pub fn new(claimant: impl Into<Claimant>) -> Self {
        Self {
            claimant: claimant.into(),
            attached_value: 0,
        }
    }

    /// Set the attached value
    pub fn with_attached_value(mut self, amount: u64) -> Self {
        self.attached_value = amount;
        self
    }

    /// Derive the claim key for `digest` from the caller's own identity
    ///
    /// # Examples
    ///
    /// ```
    /// use pok_domain::{CallContext, ClaimKey};
    ///
    /// let ctx = CallContext::new("tz1alice");
    /// assert_eq!(ctx.key_for("abc2"), ClaimKey::new("tz1alice", "abc2"));
    /// ```
    pub fn key_for(&self, digest: impl Into<Digest>) -> ClaimKey {
        ClaimKey {
            claimant: self.claimant.clone(),
            digest: digest.into(),
        }
    }
}
