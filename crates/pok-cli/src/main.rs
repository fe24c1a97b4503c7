//! pok - Command-line interface for the Proof of Knowledge registry.

use clap::Parser;
use pok_cli::commands;
use pok_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> pok_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // One-shot profile override; not written back to the config file
    if let Some(profile_name) = cli.profile {
        config.override_profile(profile_name)?;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Profile(args) => {
            commands::execute_profile(args, &mut config, &formatter)?;
        }
        Command::Claim(args) => {
            let (mut registry, claimant) = commands::open_registry(&config)?;
            commands::execute_claim(args, &mut registry, &claimant, &formatter)?;
        }
        Command::Withdraw(args) => {
            let (mut registry, claimant) = commands::open_registry(&config)?;
            commands::execute_withdraw(args, &mut registry, &claimant, &formatter)?;
        }
        Command::Show(args) => {
            let (registry, claimant) = commands::open_registry(&config)?;
            commands::execute_show(args, &registry, &claimant, &formatter)?;
        }
        Command::List(args) => {
            let (registry, claimant) = commands::open_registry(&config)?;
            commands::execute_list(args, &registry, &claimant, &formatter)?;
        }
        Command::History(args) => {
            let (registry, claimant) = commands::open_registry(&config)?;
            commands::execute_history(args, &registry, &claimant, &formatter)?;
        }
        Command::Metadata => {
            let (registry, _) = commands::open_registry(&config)?;
            commands::execute_metadata(&registry, &formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr; RUST_LOG overrides the -v level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
