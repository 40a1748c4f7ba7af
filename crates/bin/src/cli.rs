//! CLI argument definitions for the Credbook binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use credbook::{AccountType, constants::STORAGE_KEY};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned table for people
    Human,
    /// One JSON document per command
    Json,
}

/// Credbook account list manager
#[derive(Parser, Debug)]
#[command(name = "credbook")]
#[command(about = "Credbook: keep a local list of LDAP and local accounts")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the account list lives
#[derive(clap::Args, Debug)]
pub struct StoreArgs {
    /// Data directory holding credbook.json
    #[arg(short = 'D', long, env = "CREDBOOK_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage key the account list is kept under
    #[arg(long, env = "CREDBOOK_STORAGE_KEY", default_value = STORAGE_KEY, global = true)]
    pub storage_key: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all accounts
    List,
    /// Add a new account
    Add(AddArgs),
    /// Remove an account
    Remove {
        /// Account id
        id: String,
    },
    /// Switch an account between LDAP and LOCAL
    SetType {
        /// Account id
        id: String,
        /// New type: ldap or local
        kind: AccountType,
    },
    /// Change fields of an account
    Update(UpdateArgs),
    /// Report invalid accounts; exits non-zero if any are found
    Check,
}

/// Arguments for the add command
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Account type: ldap or local
    #[arg(short = 't', long = "type", default_value = "ldap")]
    pub kind: AccountType,

    #[arg(short, long)]
    pub login: Option<String>,

    /// Password (LOCAL accounts only)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Labels as `a; b; c`
    #[arg(long)]
    pub labels: Option<String>,
}

/// Arguments for the update command
#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Account id
    pub id: String,

    #[arg(short, long)]
    pub login: Option<String>,

    #[arg(short, long, conflicts_with = "clear_password")]
    pub password: Option<String>,

    /// Remove the stored password
    #[arg(long)]
    pub clear_password: bool,

    /// Labels as `a; b; c`; an empty string removes all labels
    #[arg(long)]
    pub labels: Option<String>,
}
