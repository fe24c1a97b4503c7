//! pok CLI library.
//!
//! This library provides the core functionality for the `pok` command-line
//! interface: identity profiles, claim submission and withdrawal, and audit
//! reads against the registry's store.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
