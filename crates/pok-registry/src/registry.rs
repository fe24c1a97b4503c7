//! The claim registry and its two mutating operations

use crate::{RegistryConfig, RegistryError};
use pok_domain::traits::ClaimStore;
use pok_domain::{CallContext, ClaimRecord, Digest, RegistryMetadata};
use tracing::{debug, info, warn};

/// Registry of knowledge claims over an injected store
///
/// Claims are keyed by the caller's authenticated identity and a digest, so a
/// claimant can only ever touch its own records. Operations take `&mut self`
/// and therefore run one at a time, each either fully applied or not at all.
///
/// # Examples
///
/// ```
/// use pok_domain::{CallContext, ClaimKey, ClaimRecord};
/// use pok_domain::traits::ClaimStore;
/// use pok_registry::{ClaimRegistry, RegistryConfig};
/// use pok_store::MemoryStore;
///
/// let mut registry = ClaimRegistry::new(MemoryStore::new(), RegistryConfig::default()).unwrap();
/// let ctx = CallContext::new("tz1alice");
///
/// registry.upsert_claim(&ctx, "abc2", ClaimRecord::new(true, false, false)).unwrap();
/// let stored = registry.store().get_claim(&ClaimKey::new("tz1alice", "abc2")).unwrap();
/// assert!(stored.unwrap().claims_origination);
/// ```
pub struct ClaimRegistry<S> {
    store: S,
}

impl<S> ClaimRegistry<S>
where
    S: ClaimStore,
    S::Error: std::fmt::Display,
{
    /// Create a registry over `store`
    ///
    /// An empty store receives the configured metadata; a store that already
    /// has metadata keeps what it has.
    pub fn new(mut store: S, config: RegistryConfig) -> Result<Self, RegistryError> {
        match store.metadata().map_err(store_error)? {
            Some(existing) => {
                debug!(
                    name = existing.name().unwrap_or_default(),
                    "Opened existing registry"
                );
            }
            None => {
                let metadata = config.to_metadata();
                store.init_metadata(&metadata).map_err(store_error)?;
                info!(
                    name = metadata.name().unwrap_or_default(),
                    "Created registry"
                );
            }
        }

        Ok(Self { store })
    }

    /// Create or fully replace the caller's claim on `digest`
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidAttachedValue`] if the call carries value; nothing
    /// is written in that case.
    pub fn upsert_claim(
        &mut self,
        ctx: &CallContext,
        digest: impl Into<Digest>,
        record: ClaimRecord,
    ) -> Result<(), RegistryError> {
        let digest = digest.into();
        check_attached_value(ctx, "upsert", &digest)?;

        let key = ctx.key_for(digest);
        self.store.put_claim(&key, &record).map_err(store_error)?;

        info!(
            claimant = %key.claimant,
            digest = %key.digest,
            origination = record.claims_origination,
            copyright = record.claims_copyright,
            innovation = record.claims_innovation,
            "Claim recorded"
        );

        Ok(())
    }

    /// Withdraw the caller's claim on `digest`
    ///
    /// Withdrawing a claim that does not exist succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidAttachedValue`] if the call carries value.
    pub fn withdraw_claim(
        &mut self,
        ctx: &CallContext,
        digest: impl Into<Digest>,
    ) -> Result<(), RegistryError> {
        let digest = digest.into();
        check_attached_value(ctx, "withdraw", &digest)?;

        let key = ctx.key_for(digest);
        let removed = self.store.remove_claim(&key).map_err(store_error)?;

        if removed {
            info!(claimant = %key.claimant, digest = %key.digest, "Claim withdrawn");
        } else {
            debug!(claimant = %key.claimant, digest = %key.digest, "No claim to withdraw");
        }

        Ok(())
    }

    /// Metadata describing this registry
    pub fn metadata(&self) -> Result<RegistryMetadata, RegistryError> {
        Ok(self
            .store
            .metadata()
            .map_err(store_error)?
            .unwrap_or_default())
    }
}

impl<S> ClaimRegistry<S> {
    /// Read access to the backing store, for audit queries
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn check_attached_value(ctx: &CallContext, op: &str, digest: &Digest) -> Result<(), RegistryError> {
    if ctx.attached_value != 0 {
        warn!(
            claimant = %ctx.claimant,
            %digest,
            amount = ctx.attached_value,
            "Rejected {} with attached value",
            op
        );
        return Err(RegistryError::InvalidAttachedValue {
            amount: ctx.attached_value,
        });
    }
    Ok(())
}

fn store_error<E: std::fmt::Display>(e: E) -> RegistryError {
    RegistryError::Store(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pok_domain::traits::ClaimQuery;
    use pok_domain::ClaimKey;
    use pok_store::MemoryStore;

    fn registry() -> ClaimRegistry<MemoryStore> {
        ClaimRegistry::new(MemoryStore::new(), RegistryConfig::default()).unwrap()
    }

    #[test]
    fn test_new_writes_metadata() {
        let registry = registry();
        assert_eq!(registry.metadata().unwrap(), RegistryMetadata::default());
    }

    #[test]
    fn test_new_keeps_existing_metadata() {
        let mut store = MemoryStore::new();
        store
            .init_metadata(&RegistryMetadata::new("Original", "First"))
            .unwrap();

        let registry = ClaimRegistry::new(store, RegistryConfig::default()).unwrap();
        assert_eq!(registry.metadata().unwrap().name(), Some("Original"));
    }

    #[test]
    fn test_round_trip() {
        let mut registry = registry();
        let ctx = CallContext::new("c");
        let record = ClaimRecord::new(true, true, true);

        registry.upsert_claim(&ctx, "h1", record.clone()).unwrap();

        let stored = registry.store().get_claim(&ClaimKey::new("c", "h1")).unwrap();
        assert_eq!(stored, Some(record));
    }

    #[test]
    fn test_upsert_with_value_is_rejected() {
        let mut registry = registry();
        let ctx = CallContext::new("c").with_attached_value(10);

        let result = registry.upsert_claim(&ctx, "abc2", ClaimRecord::default());

        assert_eq!(result, Err(RegistryError::InvalidAttachedValue { amount: 10 }));
        assert!(registry.store().is_empty());
        assert!(registry.store().history(&ClaimQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn test_withdraw_with_value_is_rejected() {
        let mut registry = registry();
        registry
            .upsert_claim(&CallContext::new("c"), "abc2", ClaimRecord::default())
            .unwrap();

        let ctx = CallContext::new("c").with_attached_value(1);
        let result = registry.withdraw_claim(&ctx, "abc2");

        assert!(matches!(result, Err(RegistryError::InvalidAttachedValue { amount: 1 })));
        assert_eq!(registry.store().len(), 1, "Claim must survive rejected withdrawal");
    }

    #[test]
    fn test_withdraw_missing_is_noop() {
        let mut registry = registry();
        let ctx = CallContext::new("c");

        registry.withdraw_claim(&ctx, "notexisting").unwrap();
        registry.withdraw_claim(&ctx, "notexisting").unwrap();

        assert!(registry.store().is_empty());
    }

    #[test]
    fn test_withdraw_only_affects_own_claim() {
        let mut registry = registry();
        let alice = CallContext::new("alice");
        let bob = CallContext::new("bob");

        registry.upsert_claim(&alice, "d", ClaimRecord::default()).unwrap();
        registry.withdraw_claim(&bob, "d").unwrap();

        let stored = registry.store().get_claim(&ClaimKey::new("alice", "d")).unwrap();
        assert!(stored.is_some());
    }
}
