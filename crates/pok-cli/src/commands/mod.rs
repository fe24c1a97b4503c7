//! Command implementations.

pub mod claim;
pub mod history;
pub mod list;
pub mod metadata;
pub mod profile;
pub mod show;
pub mod withdraw;

pub use self::claim::execute_claim;
pub use self::history::execute_history;
pub use self::list::execute_list;
pub use self::metadata::execute_metadata;
pub use self::profile::execute_profile;
pub use self::show::execute_show;
pub use self::withdraw::execute_withdraw;

use crate::config::Config;
use crate::error::Result;
use pok_domain::Claimant;
use pok_registry::ClaimRegistry;
use pok_store::SqliteStore;
use std::fs;

/// Registry backed by the profile's database.
pub type Registry = ClaimRegistry<SqliteStore>;

/// Open the active profile's registry and return it with the profile's identity.
pub fn open_registry(config: &Config) -> Result<(Registry, Claimant)> {
    let profile = config.get_active_profile()?;

    if let Some(parent) = profile.database.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    tracing::debug!(database = %profile.database.display(), "Opening registry");
    let store = SqliteStore::new(&profile.database)?;
    let registry = ClaimRegistry::new(store, config.registry.clone())?;

    Ok((registry, Claimant::new(profile.claimant.clone())))
}
