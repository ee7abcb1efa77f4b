//! Terminal display for generated names, blueprints and configuration.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use namesmith::generator::ScoredCandidate;
use namesmith::{GeneratedName, NameBlueprint, NamesmithConfig};

/// Print generated names, one block per name
pub fn display_generated(results: &[GeneratedName]) {
    if results.is_empty() {
        println!("{}", "No names could be confirmed for these parents.".yellow());
        return;
    }

    for (index, generated) in results.iter().enumerate() {
        println!(
            "{} {} {}",
            format!("{}.", index + 1).dimmed(),
            generated.name.bright_green().bold(),
            format!(
                "({}, {}, confidence {})",
                generated.gender, generated.origin, generated.confidence
            )
            .dimmed()
        );
        for line in generated.meaning.lines() {
            println!("   {line}");
        }
        println!();
    }
}

/// Print blueprints as a table
pub fn display_blueprints(blueprints: &[NameBlueprint]) {
    #[derive(Tabled)]
    struct BlueprintRow {
        draft: String,
        gender: String,
        confidence: u8,
        prefix: String,
        suffix: String,
        includes: String,
    }

    let rows: Vec<BlueprintRow> = blueprints
        .iter()
        .map(|bp| BlueprintRow {
            draft: bp.draft_name.clone(),
            gender: bp.gender.to_string(),
            confidence: bp.confidence,
            prefix: bp.constraints.prefix.clone().unwrap_or_default(),
            suffix: bp.constraints.suffix.clone().unwrap_or_default(),
            includes: bp.constraints.includes.join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{table}");
}

/// Print ranked fallback candidates
pub fn display_ranking(ranked: &[ScoredCandidate]) {
    if ranked.is_empty() {
        println!("{}", "No pool entry matches these fragments.".yellow());
        return;
    }

    #[derive(Tabled)]
    struct RankRow {
        rank: usize,
        name: String,
        score: u32,
    }

    let rows: Vec<RankRow> = ranked
        .iter()
        .enumerate()
        .map(|(index, candidate)| RankRow {
            rank: index + 1,
            name: candidate.name.clone(),
            score: candidate.score,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{table}");
}

/// Print a short summary of the effective configuration
pub fn display_config_summary(config: &NamesmithConfig) {
    #[derive(Tabled)]
    struct ConfigRow {
        setting: String,
        value: String,
    }

    let rows = vec![
        ConfigRow {
            setting: "lookup.endpoint".to_string(),
            value: config.lookup.endpoint.clone(),
        },
        ConfigRow {
            setting: "lookup.timeout_secs".to_string(),
            value: config.lookup.timeout_secs.to_string(),
        },
        ConfigRow {
            setting: "pools.girls".to_string(),
            value: format!("{} names", config.pools.girls.len()),
        },
        ConfigRow {
            setting: "pools.boys".to_string(),
            value: format!("{} names", config.pools.boys.len()),
        },
        ConfigRow {
            setting: "payment.provider_url".to_string(),
            value: config.payment.provider_url.clone(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{table}");
}
