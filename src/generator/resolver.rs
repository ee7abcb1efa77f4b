//! Resolution of blueprints into validated names.
//!
//! Per blueprint: exact lookup of the draft, then lookup of the closest real
//! name from the fallback pool, then drop. Blueprints are resolved strictly in
//! construction order and results are deduplicated by resolved name.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::blueprint::{render_rationale, BlueprintBuilder, Gender, GenderFilter, NameBlueprint};
use super::fallback::{FallbackMatcher, FallbackNamePools};
use crate::core::config::NamesmithConfig;
use crate::core::errors::Result;
use crate::lookup::{HttpNameLookup, LookupResult, NameLookup};

/// A resolved, registry-validated name suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub name: String,
    /// Registry meaning, a blank line, then the construction rationale
    pub meaning: String,
    pub origin: String,
    pub gender: Gender,
    pub confidence: u8,
}

/// Drives blueprint construction and resolution for one request at a time.
///
/// Holds no mutable state, so one instance can serve concurrent requests.
pub struct NameGenerator<L> {
    lookup: L,
    matcher: FallbackMatcher,
    builder: BlueprintBuilder,
}

impl NameGenerator<HttpNameLookup> {
    /// Generator wired to the HTTP registry described by `config`
    pub fn from_config(config: &NamesmithConfig) -> Result<Self> {
        config.validate()?;
        let lookup = HttpNameLookup::new(&config.lookup)?;
        Ok(Self::new(lookup, config.pools.clone()))
    }
}

impl<L: NameLookup> NameGenerator<L> {
    pub fn new(lookup: L, pools: FallbackNamePools) -> Self {
        Self {
            lookup,
            matcher: FallbackMatcher::new(pools),
            builder: BlueprintBuilder::new(),
        }
    }

    pub fn matcher(&self) -> &FallbackMatcher {
        &self.matcher
    }

    /// Generate names for the given parents, filtered by `target`.
    ///
    /// Blank names yield an empty list. When a gender filter leaves nothing
    /// resolvable, the first blueprint of the other gender that resolves is
    /// returned instead, tagged with its own gender. Blueprints already tried
    /// in the filtered pass are not looked up again, so a lookup that timed out
    /// there is not retried.
    pub async fn generate(
        &self,
        father: &str,
        mother: &str,
        target: GenderFilter,
    ) -> Vec<GeneratedName> {
        let father = father.trim();
        let mother = mother.trim();
        if father.is_empty() || mother.is_empty() {
            debug!("blank parent name, nothing to generate");
            return Vec::new();
        }

        let blueprints = self.builder.build(father, mother);
        let mut seen = HashSet::new();
        let mut results = Vec::new();

        for blueprint in blueprints.iter().filter(|bp| target.admits(bp.gender)) {
            if let Some(generated) = self.resolve(blueprint, &seen).await {
                seen.insert(generated.name.clone());
                results.push(generated);
            }
        }

        if results.is_empty() && target != GenderFilter::All {
            // blueprints admitted by the filter already failed above
            for blueprint in blueprints.iter().filter(|bp| !target.admits(bp.gender)) {
                if let Some(generated) = self.resolve(blueprint, &seen).await {
                    warn!(
                        requested = %target,
                        returned = %generated.gender,
                        resolved = %generated.name,
                        "no name matched the requested gender, returning cross-gender fallback"
                    );
                    results.push(generated);
                    break;
                }
            }
        }

        info!(
            father,
            mother,
            target = %target,
            blueprints = blueprints.len(),
            resolved = results.len(),
            "name generation finished"
        );
        results
    }

    /// Resolve one blueprint, skipping names already in `seen`.
    pub async fn resolve(
        &self,
        blueprint: &NameBlueprint,
        seen: &HashSet<String>,
    ) -> Option<GeneratedName> {
        let draft = blueprint.draft_name.as_str();
        if seen.contains(draft) {
            debug!(draft, "draft already resolved by an earlier blueprint");
            return None;
        }

        if let Some(found) = self.lookup.lookup(draft).await {
            debug!(draft, gender = %blueprint.gender, "draft resolved exactly");
            return Some(accept(blueprint, draft, found));
        }

        let fallback = match self
            .matcher
            .find_closest_match(&blueprint.constraints, blueprint.gender)
        {
            Some(name) => name,
            None => {
                debug!(draft, "no fallback candidate scored, dropping blueprint");
                return None;
            }
        };
        if seen.contains(fallback) {
            debug!(draft, fallback, "fallback already resolved, dropping blueprint");
            return None;
        }

        match self.lookup.lookup(fallback).await {
            Some(found) => {
                info!(draft, fallback, "substituted closest real name");
                Some(accept(blueprint, fallback, found))
            }
            None => {
                debug!(draft, fallback, "fallback not in registry, dropping blueprint");
                None
            }
        }
    }
}

fn accept(blueprint: &NameBlueprint, name: &str, found: LookupResult) -> GeneratedName {
    GeneratedName {
        name: name.to_string(),
        meaning: format!("{}\n\n{}", found.meaning, render_rationale(blueprint, name)),
        origin: found.origin,
        gender: blueprint.gender,
        confidence: blueprint.confidence,
    }
}
