//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use pok_registry::RegistryConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Metadata for newly created registries
    #[serde(default)]
    pub registry: RegistryConfig,

    /// File this configuration was loaded from
    #[serde(skip)]
    path: Option<PathBuf>,

    /// Profile chosen for this invocation only; never saved
    #[serde(skip)]
    profile_override: Option<String>,
}

/// Identity profile: who is claiming, and into which registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Claimant identity used for every call made with this profile
    ///
    /// The generated default profile takes it from `$USER` (or `$USERNAME`),
    /// falling back to `anonymous`.
    pub claimant: String,

    /// Registry database path
    pub database: PathBuf,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Directory holding the default config and database.
    pub fn home() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".pok"))
    }

    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home()?.join("config.toml"))
    }

    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&contents)?;
            config.path = Some(path.to_path_buf());
            if config.profiles.is_empty() {
                config
                    .profiles
                    .insert(config.active_profile.clone(), Profile::default());
            }
            Ok(config)
        } else {
            let config = Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the file it came from (or the default path).
    pub fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Self::default_path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Name of the profile in effect: the override if one is set, else the saved one.
    pub fn active_profile_name(&self) -> &str {
        self.profile_override
            .as_deref()
            .unwrap_or(&self.active_profile)
    }

    /// Get the profile in effect.
    pub fn get_active_profile(&self) -> Result<&Profile> {
        let name = self.active_profile_name();
        self.profiles
            .get(name)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", name)))
    }

    /// Use another profile for this invocation without changing the saved one.
    pub fn override_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.profile_override = Some(name);
        Ok(())
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        self.profile_override = None;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert("default".to_string(), Profile::default());

        Self {
            active_profile: "default".to_string(),
            profiles,
            settings: Settings::default(),
            registry: RegistryConfig::default(),
            path: None,
            profile_override: None,
        }
    }
}

impl Profile {
    /// Default registry database location.
    pub fn default_database() -> PathBuf {
        Config::home()
            .map(|home| home.join("registry.db"))
            .unwrap_or_else(|_| PathBuf::from("registry.db"))
    }
}

impl Default for Profile {
    fn default() -> Self {
        let claimant = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "anonymous".to_string());

        Self {
            claimant,
            database: Self::default_database(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
