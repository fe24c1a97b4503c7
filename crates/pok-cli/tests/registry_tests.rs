//! Integration tests for opening profile registries from a config file.

use pok_cli::commands::open_registry;
use pok_cli::config::Profile;
use pok_cli::Config;
use pok_domain::traits::{ClaimQuery, ClaimStore};
use pok_domain::{CallContext, ClaimRecord};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> Config {
    let mut config = Config::load_from(dir.path().join("config.toml")).unwrap();
    config.set_profile(
        "default".to_string(),
        Profile {
            claimant: "tz1alice".to_string(),
            database: dir.path().join("data").join("registry.db"),
        },
    );
    config
}

#[test]
fn test_open_registry_creates_database() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let (registry, claimant) = open_registry(&config).unwrap();

    assert_eq!(claimant.as_str(), "tz1alice");
    assert!(dir.path().join("data").join("registry.db").exists());
    assert_eq!(
        registry.metadata().unwrap().name(),
        Some("Proof of Knowledge")
    );
}

#[test]
fn test_claims_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    {
        let (mut registry, claimant) = open_registry(&config).unwrap();
        registry
            .upsert_claim(
                &CallContext::new(claimant),
                "abc2",
                ClaimRecord::new(true, false, false),
            )
            .unwrap();
    }

    let (registry, _) = open_registry(&config).unwrap();
    let claims = registry
        .store()
        .query_claims(&ClaimQuery::by_claimant("tz1alice"))
        .unwrap();

    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].key.digest.as_str(), "abc2");
    assert!(claims[0].record.claims_origination);
}

#[test]
fn test_profiles_share_a_database() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    let database = dir.path().join("data").join("registry.db");
    config.set_profile(
        "bob".to_string(),
        Profile {
            claimant: "tz1bob".to_string(),
            database,
        },
    );

    {
        let (mut registry, claimant) = open_registry(&config).unwrap();
        registry
            .upsert_claim(&CallContext::new(claimant), "abc2", ClaimRecord::default())
            .unwrap();
    }

    config.switch_profile("bob".to_string()).unwrap();
    let (mut registry, claimant) = open_registry(&config).unwrap();
    registry
        .withdraw_claim(&CallContext::new(claimant), "abc2")
        .unwrap();

    let claims = registry.store().query_claims(&ClaimQuery::default()).unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].key.claimant.as_str(), "tz1alice");
}
