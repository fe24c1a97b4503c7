//! History command implementation.

use super::Registry;
use crate::cli::QueryArgs;
use crate::error::Result;
use crate::output::Formatter;
use pok_domain::traits::ClaimStore;
use pok_domain::Claimant;

/// Execute the history command.
pub fn execute_history(
    args: QueryArgs,
    registry: &Registry,
    claimant: &Claimant,
    formatter: &Formatter,
) -> Result<()> {
    let query = args.to_query(claimant);
    let entries = registry.store().history(&query)?;

    println!("{}", formatter.format_history(&entries)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::memory_registry;
    use crate::config::OutputFormat;
    use pok_domain::{CallContext, ClaimRecord, Operation};

    fn args(digest: Option<&str>, limit: Option<usize>) -> QueryArgs {
        QueryArgs {
            claimant: None,
            digest: digest.map(str::to_string),
            all: false,
            limit,
        }
    }

    #[test]
    fn test_history_is_scoped_to_own_claimant() {
        let mut registry = memory_registry();
        let alice = CallContext::new("alice");
        let bob = CallContext::new("bob");
        registry.upsert_claim(&alice, "abc2", ClaimRecord::default()).unwrap();
        registry.upsert_claim(&bob, "abc2", ClaimRecord::default()).unwrap();
        registry.withdraw_claim(&alice, "abc2").unwrap();

        let entries = registry
            .store()
            .history(&args(None, None).to_query(&Claimant::new("alice")))
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.key.claimant.as_str() == "alice"));
        assert_eq!(entries[0].operation, Operation::Upsert);
        assert_eq!(entries[1].operation, Operation::Withdraw);
    }

    #[test]
    fn test_history_limit_keeps_latest() {
        let mut registry = memory_registry();
        let ctx = CallContext::new("alice");
        for digest in ["d1", "d2", "d3"] {
            registry.upsert_claim(&ctx, digest, ClaimRecord::default()).unwrap();
        }

        let entries = registry
            .store()
            .history(&args(None, Some(2)).to_query(&Claimant::new("alice")))
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key.digest.as_str(), "d2");
        assert_eq!(entries[1].key.digest.as_str(), "d3");
    }

    #[test]
    fn test_execute_history() {
        let mut registry = memory_registry();
        let ctx = CallContext::new("alice");
        registry.upsert_claim(&ctx, "abc2", ClaimRecord::default()).unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_history(
            args(Some("abc2"), None),
            &registry,
            &Claimant::new("alice"),
            &formatter,
        )
        .unwrap();
    }
}
