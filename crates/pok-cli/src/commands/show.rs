//! Show command implementation.

use super::Registry;
use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use pok_domain::traits::ClaimStore;
use pok_domain::{Claim, ClaimKey, Claimant};

/// Execute the show command.
pub fn execute_show(
    args: ShowArgs,
    registry: &Registry,
    claimant: &Claimant,
    formatter: &Formatter,
) -> Result<()> {
    match lookup(&args, registry, claimant)? {
        Some(claim) => println!("{}", formatter.format_claims(&[claim])?),
        None => println!(
            "{}",
            formatter.info(&format!(
                "No claim by {} on {}",
                args.claimant.as_deref().unwrap_or(claimant.as_str()),
                args.digest
            ))
        ),
    }

    Ok(())
}

/// Look up the stored claim for the requested (or own) claimant.
fn lookup(args: &ShowArgs, registry: &Registry, own: &Claimant) -> Result<Option<Claim>> {
    let claimant = args
        .claimant
        .clone()
        .map(Claimant::new)
        .unwrap_or_else(|| own.clone());
    let key = ClaimKey::new(claimant, args.digest.as_str());

    let record = registry.store().get_claim(&key)?;
    Ok(record.map(|record| Claim::new(key, record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::memory_registry;
    use pok_domain::{CallContext, ClaimRecord};

    #[test]
    fn test_lookup_own_and_other() {
        let mut registry = memory_registry();
        registry
            .upsert_claim(&CallContext::new("bob"), "abc2", ClaimRecord::new(true, true, true))
            .unwrap();

        let own = Claimant::new("alice");
        let mine = ShowArgs {
            digest: "abc2".to_string(),
            claimant: None,
        };
        assert!(lookup(&mine, &registry, &own).unwrap().is_none());

        let bobs = ShowArgs {
            digest: "abc2".to_string(),
            claimant: Some("bob".to_string()),
        };
        let claim = lookup(&bobs, &registry, &own).unwrap().unwrap();
        assert_eq!(claim.record, ClaimRecord::new(true, true, true));
    }
}
