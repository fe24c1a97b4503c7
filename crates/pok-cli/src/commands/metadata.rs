//! Metadata command implementation.

use super::Registry;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the metadata command.
pub fn execute_metadata(registry: &Registry, formatter: &Formatter) -> Result<()> {
    let metadata = registry.metadata()?;
    println!("{}", formatter.format_metadata(&metadata)?);
    Ok(())
}
