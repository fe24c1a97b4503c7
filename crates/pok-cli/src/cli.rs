//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use pok_domain::traits::ClaimQuery;
use pok_domain::Claimant;

/// pok - Record that you knew of a hashed artifact, and what you claim about it.
#[derive(Debug, Parser)]
#[command(name = "pok")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(long, global = true, env = "POK_CONFIG")]
    pub config: Option<String>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (digests or entry ids only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Make or replace a claim on a digest
    Claim(ClaimArgs),

    /// Withdraw your claims on one or more digests
    Withdraw(WithdrawArgs),

    /// Show a single stored claim
    Show(ShowArgs),

    /// List stored claims
    List(QueryArgs),

    /// Show the journal of accepted claims and withdrawals
    History(QueryArgs),

    /// Show registry metadata
    Metadata,

    /// Manage identity profiles
    Profile(ProfileArgs),
}

/// Arguments for the claim command.
#[derive(Debug, Parser)]
pub struct ClaimArgs {
    /// Digest of the artifact (computed by you, stored as given)
    pub digest: String,

    /// Claim you created the artifact
    #[arg(short, long)]
    pub origination: bool,

    /// Claim you hold copyright over the artifact
    #[arg(short, long)]
    pub copyright: bool,

    /// Claim you contributed novel ideas present in the artifact
    #[arg(short, long)]
    pub innovation: bool,

    /// Free-text elaboration of the claim
    #[arg(short, long)]
    pub message: Option<String>,

    /// Party you are claiming on behalf of
    #[arg(short = 'b', long)]
    pub on_behalf_of: Option<String>,

    /// Value to attach to the call (anything but 0 is rejected)
    #[arg(long, default_value = "0")]
    pub amount: u64,
}

/// Arguments for the withdraw command.
#[derive(Debug, Parser)]
pub struct WithdrawArgs {
    /// Digests to withdraw
    pub digests: Vec<String>,

    /// Read digests from file (one per line)
    #[arg(long)]
    pub file: Option<String>,

    /// Read digests from stdin (one per line)
    #[arg(long)]
    pub stdin: bool,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Value to attach to each call (anything but 0 is rejected)
    #[arg(long, default_value = "0")]
    pub amount: u64,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Digest to look up
    pub digest: String,

    /// Claimant to look up (defaults to the active profile's identity)
    #[arg(short, long)]
    pub claimant: Option<String>,
}

/// Filters shared by the list and history commands.
#[derive(Debug, Parser)]
pub struct QueryArgs {
    /// Filter by claimant
    #[arg(short, long)]
    pub claimant: Option<String>,

    /// Filter by digest
    #[arg(short, long)]
    pub digest: Option<String>,

    /// Include every claimant when no filter is given
    #[arg(short, long)]
    pub all: bool,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl QueryArgs {
    /// Build the store query, scoping to `own` when nothing else is asked for.
    pub fn to_query(&self, own: &Claimant) -> ClaimQuery {
        let claimant = match (&self.claimant, &self.digest, self.all) {
            (Some(c), _, _) => Some(Claimant::new(c.clone())),
            (None, None, false) => Some(own.clone()),
            _ => None,
        };

        ClaimQuery {
            claimant,
            digest: self.digest.clone().map(Into::into),
            limit: self.limit,
        }
    }
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Claimant identity (e.g. account address)
        #[arg(short, long)]
        claimant: String,
        /// Registry database path
        #[arg(short, long)]
        database: Option<String>,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
