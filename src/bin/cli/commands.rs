//! Command execution for the namesmith CLI.

use std::path::Path;

use anyhow::Context;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cli::args::{BlueprintsArgs, GenerateArgs, MatchArgs, OutputFormat, PayLinkArgs};
use crate::cli::output;
use namesmith::{
    BlueprintBuilder, ClickLinkBuilder, FallbackMatcher, NameConstraints, NameGenerator,
    NamesmithConfig, PaymentRequest,
};

/// Load configuration from `path` (or defaults), overlay the environment and validate.
pub fn load_configuration(path: Option<&Path>) -> anyhow::Result<NamesmithConfig> {
    let mut config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration file");
            NamesmithConfig::from_yaml_file(path)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => NamesmithConfig::default(),
    };
    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

/// Generate and validate names against the registry
pub async fn generate_command(args: GenerateArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_configuration(config_path)?;
    let generator = NameGenerator::from_config(&config)?;

    let results = generator
        .generate(&args.parents.father, &args.parents.mother, args.gender.into())
        .await;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => output::display_generated(&results),
    }
    Ok(())
}

/// Print blueprints without any network access
pub fn blueprints_command(args: BlueprintsArgs) -> anyhow::Result<()> {
    let father = args.parents.father.trim();
    let mother = args.parents.mother.trim();
    if father.is_empty() || mother.is_empty() {
        anyhow::bail!("both --father and --mother must be non-blank");
    }

    let blueprints = BlueprintBuilder::new().build(father, mother);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&blueprints)?),
        OutputFormat::Text => output::display_blueprints(&blueprints),
    }
    Ok(())
}

/// Rank fallback pool entries for the given fragments
pub fn match_command(args: MatchArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_configuration(config_path)?;
    let matcher = FallbackMatcher::new(config.pools);

    let includes: Vec<&str> = args.includes.iter().map(String::as_str).collect();
    let constraints =
        NameConstraints::new(args.prefix.as_deref(), args.suffix.as_deref(), &includes);
    let ranked = matcher.rank_candidates(&constraints, args.gender.into());

    output::display_ranking(&ranked);
    Ok(())
}

/// Build a Click payment link
pub fn pay_link_command(args: PayLinkArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_configuration(config_path)?;
    let builder = ClickLinkBuilder::new(config.payment);
    let request = PaymentRequest::new(args.amount, args.plan, args.user);

    let link = if args.onetime {
        builder.onetime_link(&request, args.plan_code.as_deref())?
    } else {
        builder.redirect_link(&request)?
    };
    println!("{link}");
    Ok(())
}

/// Print default configuration
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default namesmith configuration".dimmed());
    println!("{}", "# Save this to a file and customize as needed".dimmed());
    println!(
        "{}",
        "# Usage: namesmith --config your-config.yml generate ...".dimmed()
    );
    println!();

    let yaml_output = serde_yaml::to_string(&NamesmithConfig::default())?;
    println!("{}", yaml_output);
    Ok(())
}

/// Validate a configuration file
pub fn validate_config(config_path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = config_path else {
        anyhow::bail!("validate-config needs a file: pass --config <FILE>");
    };

    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        path.display().to_string().cyan()
    );

    let config = match load_configuration(Some(path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "❌ Configuration validation failed:".red(), e);
            eprintln!(
                "{}",
                "💡 Tip: Use 'namesmith print-default-config' to see valid format".dimmed()
            );
            std::process::exit(1);
        }
    };

    println!("{}", "✅ Configuration file is valid!".bright_green().bold());
    output::display_config_summary(&config);
    Ok(())
}
