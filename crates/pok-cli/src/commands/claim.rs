//! Claim command implementation.

use super::Registry;
use crate::cli::ClaimArgs;
use crate::error::Result;
use crate::output::Formatter;
use pok_domain::{CallContext, ClaimRecord, Claimant};

/// Execute the claim command.
pub fn execute_claim(
    args: ClaimArgs,
    registry: &mut Registry,
    claimant: &Claimant,
    formatter: &Formatter,
) -> Result<()> {
    let ctx = CallContext::new(claimant.clone()).with_attached_value(args.amount);
    let record = build_record(&args);
    let key = ctx.key_for(args.digest.as_str());

    registry.upsert_claim(&ctx, args.digest, record)?;

    println!("{}", formatter.claim_recorded(&key));

    Ok(())
}

/// Build the full record from the arguments; omitted flags are false.
fn build_record(args: &ClaimArgs) -> ClaimRecord {
    ClaimRecord {
        claims_origination: args.origination,
        claims_copyright: args.copyright,
        claims_innovation: args.innovation,
        message: args.message.clone(),
        on_behalf_of: args.on_behalf_of.clone(),
    }
}
