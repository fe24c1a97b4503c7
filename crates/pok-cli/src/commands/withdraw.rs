//! Withdraw command implementation.

use super::Registry;
use crate::cli::WithdrawArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use pok_domain::{CallContext, Claimant};
use std::fs;
use std::io::{self, BufRead};

/// Execute the withdraw command.
pub fn execute_withdraw(
    args: WithdrawArgs,
    registry: &mut Registry,
    claimant: &Claimant,
    formatter: &Formatter,
) -> Result<()> {
    // Collect digests from various sources
    let mut digests = args.digests.clone();

    if let Some(file_path) = &args.file {
        digests.extend(read_digests_from_file(file_path)?);
    }

    if args.stdin {
        if !args.yes {
            return Err(CliError::InvalidInput(
                "--stdin needs --yes since stdin cannot also answer the prompt".to_string(),
            ));
        }
        digests.extend(read_digests(io::stdin().lock())?);
    }

    if digests.is_empty() {
        return Err(CliError::InvalidInput("No digests provided".to_string()));
    }

    // Confirm unless --yes is specified
    if !args.yes {
        println!("About to withdraw {} claim(s) as {}:", digests.len(), claimant);
        for digest in &digests {
            println!("  - {}", digest);
        }
        print!("Continue? [y/N] ");
        io::Write::flush(&mut io::stdout())?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !response.trim().eq_ignore_ascii_case("y") {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    withdraw_all(registry, claimant, args.amount, &digests)?;
    println!("{}", formatter.bulk_result("Withdrew", digests.len()));

    Ok(())
}

/// Withdraw each digest in turn, stopping at the first rejection.
fn withdraw_all(
    registry: &mut Registry,
    claimant: &Claimant,
    amount: u64,
    digests: &[String],
) -> Result<()> {
    let ctx = CallContext::new(claimant.clone()).with_attached_value(amount);
    for digest in digests {
        registry.withdraw_claim(&ctx, digest.as_str())?;
    }
    Ok(())
}

/// Read digests from a file (one per line).
fn read_digests_from_file(path: &str) -> Result<Vec<String>> {
    let file = fs::File::open(path)?;
    read_digests(io::BufReader::new(file))
}

/// Read non-empty, trimmed lines.
fn read_digests<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut digests = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            digests.push(trimmed.to_string());
        }
    }

    Ok(digests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::memory_registry;
    use crate::config::OutputFormat;
    use pok_domain::traits::{ClaimQuery, ClaimStore};
    use pok_domain::ClaimRecord;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_digests_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "abc2").unwrap();
        writeln!(file, "3dc1115d86910942af0d1b0bee7183e45a9f2b777f503f895546254ffdcb5017").unwrap();
        writeln!(file).unwrap(); // Empty line should be ignored
        writeln!(file, "  notexisting  ").unwrap(); // Whitespace should be trimmed

        let digests = read_digests_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(digests.len(), 3);
        assert_eq!(digests[2], "notexisting");
    }

    #[test]
    fn test_withdraw_all_including_missing() {
        let mut registry = memory_registry();
        let claimant = Claimant::new("tz1alice");
        registry
            .upsert_claim(&CallContext::new("tz1alice"), "abc2", ClaimRecord::default())
            .unwrap();

        let digests = vec!["notexisting".to_string(), "abc2".to_string()];
        withdraw_all(&mut registry, &claimant, 0, &digests).unwrap();

        let left = registry.store().query_claims(&ClaimQuery::default()).unwrap();
        assert!(left.is_empty());
    }

    #[test]
    fn test_withdraw_with_amount_keeps_claim() {
        let mut registry = memory_registry();
        let claimant = Claimant::new("tz1alice");
        registry
            .upsert_claim(&CallContext::new("tz1alice"), "abc2", ClaimRecord::default())
            .unwrap();

        let result = withdraw_all(&mut registry, &claimant, 5, &["abc2".to_string()]);
        assert!(matches!(result, Err(CliError::Registry(_))));

        let left = registry.store().query_claims(&ClaimQuery::default()).unwrap();
        assert_eq!(left.len(), 1);
    }

    #[test]
    fn test_no_digests_is_an_error() {
        let mut registry = memory_registry();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = WithdrawArgs {
            digests: vec![],
            file: None,
            stdin: false,
            yes: true,
            amount: 0,
        };

        let result = execute_withdraw(args, &mut registry, &Claimant::new("x"), &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
