//! Namesmith CLI - baby names blended from the parents' names
//!
//! Generates candidate names, inspects blueprints and fallback rankings, and
//! builds Click payment links.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging; RUST_LOG wins over --verbose
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Generate(args) => {
            cli::generate_command(args, config_path).await?;
        }
        Commands::Blueprints(args) => {
            cli::blueprints_command(args)?;
        }
        Commands::Match(args) => {
            cli::match_command(args, config_path)?;
        }
        Commands::PayLink(args) => {
            cli::pay_link_command(args, config_path)?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
        }
        Commands::ValidateConfig => {
            cli::validate_config(config_path)?;
        }
    }

    Ok(())
}
