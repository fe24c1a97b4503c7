//! List command implementation.

use super::Registry;
use crate::cli::QueryArgs;
use crate::error::Result;
use crate::output::Formatter;
use pok_domain::traits::ClaimStore;
use pok_domain::Claimant;

/// Execute the list command.
pub fn execute_list(
    args: QueryArgs,
    registry: &Registry,
    claimant: &Claimant,
    formatter: &Formatter,
) -> Result<()> {
    let query = args.to_query(claimant);
    let claims = registry.store().query_claims(&query)?;

    println!("{}", formatter.format_claims(&claims)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::memory_registry;
    use pok_domain::{CallContext, ClaimRecord};

    #[test]
    fn test_default_query_lists_own_claims() {
        let mut registry = memory_registry();
        for who in ["alice", "bob"] {
            registry
                .upsert_claim(&CallContext::new(who), "abc2", ClaimRecord::default())
                .unwrap();
        }

        let args = QueryArgs {
            claimant: None,
            digest: None,
            all: false,
            limit: None,
        };
        let claims = registry
            .store()
            .query_claims(&args.to_query(&Claimant::new("alice")))
            .unwrap();

        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].key.claimant.as_str(), "alice");
    }
}
