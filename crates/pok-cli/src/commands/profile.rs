//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::PathBuf;

/// Execute the profile command.
pub fn execute_profile(args: ProfileArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => switch_profile(config, name, formatter),
        ProfileAction::Set {
            name,
            claimant,
            database,
        } => set_profile(config, name, claimant, database, formatter),
        ProfileAction::Delete { name } => delete_profile(config, name, formatter),
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    let mut names: Vec<&String> = config.profiles.keys().collect();
    names.sort();

    println!("Available profiles:");
    for name in names {
        let profile = &config.profiles[name];
        if name == config.active_profile_name() {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        println!("    Claimant: {}", profile.claimant);
        println!("    Database: {}", profile.database.display());
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(config.active_profile_name()));
    println!("  Claimant: {} (claims are keyed under this identity)", profile.claimant);
    println!("  Database: {}", profile.database.display());

    Ok(())
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_profile(name.clone())?;
    config.save()?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
fn set_profile(
    config: &mut Config,
    name: String,
    claimant: String,
    database: Option<String>,
    formatter: &Formatter,
) -> Result<()> {
    if claimant.trim().is_empty() {
        return Err(CliError::InvalidInput("Claimant cannot be empty".to_string()));
    }

    let profile = Profile {
        claimant,
        database: database
            .map(PathBuf::from)
            .unwrap_or_else(Profile::default_database),
    };

    let action = if config.profiles.contains_key(&name) {
        "Updated"
    } else {
        "Created"
    };

    config.set_profile(name.clone(), profile);
    config.save()?;

    println!(
        "{}",
        formatter.success(&format!("{} profile '{}'", action, name))
    );

    Ok(())
}

/// Delete a profile.
fn delete_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    if name == config.active_profile || name == config.active_profile_name() {
        return Err(CliError::NotPermitted(
            "Cannot delete the active profile".to_string(),
        ));
    }

    if config.profiles.remove(&name).is_some() {
        config.save()?;
        println!(
            "{}",
            formatter.success(&format!("Deleted profile '{}'", name))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("Profile '{}' does not exist", name))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    fn temp_config(dir: &TempDir) -> Config {
        Config::load_from(dir.path().join("config.toml")).unwrap()
    }

    #[test]
    fn test_set_and_switch_profile() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_profile(
            &mut config,
            "alice".to_string(),
            "tz1alice".to_string(),
            Some(dir.path().join("alice.db").display().to_string()),
            &formatter,
        )
        .unwrap();

        assert!(config.profiles.contains_key("alice"));

        switch_profile(&mut config, "alice".to_string(), &formatter).unwrap();
        assert_eq!(config.active_profile, "alice");

        let reloaded = temp_config(&dir);
        assert_eq!(reloaded.active_profile, "alice");
        assert_eq!(reloaded.get_active_profile().unwrap().claimant, "tz1alice");
    }

    #[test]
    fn test_empty_claimant_rejected() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = set_profile(&mut config, "x".to_string(), "  ".to_string(), None, &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_set_under_override_keeps_saved_profile() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_profile(
            &mut config,
            "bob".to_string(),
            "tz1bob".to_string(),
            None,
            &formatter,
        )
        .unwrap();
        config.override_profile("bob".to_string()).unwrap();

        set_profile(
            &mut config,
            "carol".to_string(),
            "tz1carol".to_string(),
            None,
            &formatter,
        )
        .unwrap();

        let reloaded = temp_config(&dir);
        assert_eq!(reloaded.active_profile, "default");
        assert!(reloaded.profiles.contains_key("carol"));
    }

    #[test]
    fn test_delete_saved_profile_under_override() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_profile(
            &mut config,
            "bob".to_string(),
            "tz1bob".to_string(),
            None,
            &formatter,
        )
        .unwrap();
        config.override_profile("bob".to_string()).unwrap();

        let result = delete_profile(&mut config, "default".to_string(), &formatter);
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
        assert!(temp_config(&dir).profiles.contains_key("default"));
    }

    #[test]
    fn test_delete_active_profile() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = delete_profile(&mut config, "default".to_string(), &formatter);
        assert!(result.is_err());
    }
}
