//! CLI Argument Structures
//!
//! Command structures and value enums used by the namesmith binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use namesmith::{Gender, GenderFilter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Baby names blended from the parents' names
#[derive(Parser)]
#[command(name = "namesmith")]
#[command(version = VERSION)]
#[command(about = "👶 Namesmith - baby names blended from the parents' names")]
#[command(long_about = "
Blend letters of the father's and mother's names into candidate names, check
each one against the name-meaning registry, and fall back to the closest real
name when a blend is unknown.

Common Usage:

  # Suggestions for both genders
  namesmith generate --father Olim --mother Dildora

  # Girls only, as JSON
  namesmith generate --father Olim --mother Dildora --gender girl --format json

  # Inspect the blends without touching the network
  namesmith blueprints --father Olim --mother Dildora

  # Build a Click payment link
  namesmith pay-link --amount 150000 --plan premium --user 42
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (YAML); defaults are used when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate names and validate them against the registry
    Generate(GenerateArgs),

    /// Show the constructed blueprints without any lookups
    Blueprints(BlueprintsArgs),

    /// Rank fallback pool entries for a set of fragments
    #[command(name = "match")]
    Match(MatchArgs),

    /// Build a Click payment link
    #[command(name = "pay-link")]
    PayLink(PayLinkArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Validate the configuration file given with --config
    #[command(name = "validate-config")]
    ValidateConfig,
}

/// Parents' names shared by the generation commands
#[derive(Args)]
pub struct ParentArgs {
    /// Father's name
    #[arg(long)]
    pub father: String,

    /// Mother's name
    #[arg(long)]
    pub mother: String,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub parents: ParentArgs,

    /// Which gender to suggest names for
    #[arg(short, long, value_enum, default_value = "all")]
    pub gender: GenderArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct BlueprintsArgs {
    #[command(flatten)]
    pub parents: ParentArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct MatchArgs {
    /// Required prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Required suffix
    #[arg(long)]
    pub suffix: Option<String>,

    /// Additional substrings (repeatable)
    #[arg(long = "include")]
    pub includes: Vec<String>,

    /// Pool to search
    #[arg(short, long, value_enum)]
    pub gender: PoolArg,
}

#[derive(Args)]
pub struct PayLinkArgs {
    /// Amount in so'm; fractions are floored
    #[arg(long, allow_hyphen_values = true)]
    pub amount: f64,

    /// Plan identifier
    #[arg(long)]
    pub plan: String,

    /// User identifier
    #[arg(long)]
    pub user: String,

    /// Build a one-time link with a randomized transaction token
    #[arg(long)]
    pub onetime: bool,

    /// Plan code for one-time links (defaults to the plan id)
    #[arg(long, requires = "onetime")]
    pub plan_code: Option<String>,
}

/// Gender filter accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GenderArg {
    Boy,
    Girl,
    All,
}

impl From<GenderArg> for GenderFilter {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Boy => GenderFilter::Boy,
            GenderArg::Girl => GenderFilter::Girl,
            GenderArg::All => GenderFilter::All,
        }
    }
}

/// Fallback pool selector
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PoolArg {
    Boy,
    Girl,
}

impl From<PoolArg> for Gender {
    fn from(arg: PoolArg) -> Self {
        match arg {
            PoolArg::Boy => Gender::Boy,
            PoolArg::Girl => Gender::Girl,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}
