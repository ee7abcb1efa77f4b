//! Closest-match scoring against the curated pools of real names.

use serde::{Deserialize, Serialize};

use crate::core::config::validate_no_blank_entries;
use crate::core::errors::Result;

use super::blueprint::{Gender, NameConstraints};

/// Score for a candidate starting with the prefix.
pub const PREFIX_START_SCORE: u32 = 50;
/// Score for a candidate merely containing the prefix.
pub const PREFIX_CONTAINS_SCORE: u32 = 25;
/// Score for a candidate ending with the suffix.
pub const SUFFIX_END_SCORE: u32 = 40;
/// Score for a candidate merely containing the suffix.
pub const SUFFIX_CONTAINS_SCORE: u32 = 20;
/// Score per additional substring found anywhere in the candidate.
pub const INCLUDE_SCORE: u32 = 10;

const DEFAULT_GIRL_NAMES: &[&str] = &[
    "Kabira", "Dilnoza", "Dildora", "Nodira", "Madina", "Malika", "Mohira", "Sabina", "Shahnoza",
    "Zarina", "Kamola", "Gulnora", "Nilufar", "Feruza", "Sevara", "Laylo", "Oydin", "Robiya",
    "Zuhra", "Mahliyo", "Diyora", "Munira", "Nigora", "Shahzoda", "Zebo", "Sitora", "Aziza",
    "Barno", "Charos", "Dilbar", "Gulbahor", "Hilola", "Iroda", "Jamila", "Lola", "Marjona",
    "Mohinur", "Nasiba", "Ozoda", "Rayhona", "Sarvinoz", "Umida", "Xurshida", "Yulduz",
    "Zilola", "Durdona", "Oysha", "Samira", "Sabrina", "Kumush",
];

const DEFAULT_BOY_NAMES: &[&str] = &[
    "Kamol", "Kamron", "Kamoliddin", "Olim", "Alisher", "Bobur", "Jasur", "Sardor", "Doniyor",
    "Javohir", "Temur", "Umid", "Farrux", "Shoxrux", "Bekzod", "Sherzod", "Rustam", "Akmal",
    "Aziz", "Diyor", "Elbek", "Ibrohim", "Islom", "Jahongir", "Laziz", "Mirzo", "Nodir",
    "Otabek", "Rasul", "Sanjar", "Tohir", "Xurshid", "Yusuf", "Zafar", "Anvar", "Behruz",
    "Davron", "Eldor", "Komil", "Latif", "Muhammad", "Nurali", "Oybek", "Rahim", "Samir",
    "Tolib", "Valijon", "Zohid",
];

/// Curated real names, one ordered list per gender.
///
/// Pool order matters: it breaks score ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackNamePools {
    #[serde(default)]
    pub girls: Vec<String>,
    #[serde(default)]
    pub boys: Vec<String>,
}

impl Default for FallbackNamePools {
    fn default() -> Self {
        Self {
            girls: DEFAULT_GIRL_NAMES.iter().map(|s| s.to_string()).collect(),
            boys: DEFAULT_BOY_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FallbackNamePools {
    pub fn new(girls: Vec<String>, boys: Vec<String>) -> Self {
        Self { girls, boys }
    }

    /// The pool for `gender`
    pub fn for_gender(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Girl => &self.girls,
            Gender::Boy => &self.boys,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_no_blank_entries(&self.girls, "pools.girls")?;
        validate_no_blank_entries(&self.boys, "pools.boys")?;
        Ok(())
    }
}

/// A pool entry together with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    pub name: String,
    pub score: u32,
}

/// Scores pool entries against blueprint constraints.
#[derive(Debug, Clone, Default)]
pub struct FallbackMatcher {
    pools: FallbackNamePools,
}

impl FallbackMatcher {
    pub fn new(pools: FallbackNamePools) -> Self {
        Self { pools }
    }

    pub fn pools(&self) -> &FallbackNamePools {
        &self.pools
    }

    /// Additive score of `candidate` under `constraints`, case-insensitive.
    pub fn score(candidate: &str, constraints: &NameConstraints) -> u32 {
        let candidate = candidate.to_lowercase();
        let mut score = 0;

        if let Some(prefix) = &constraints.prefix {
            if candidate.starts_with(prefix.as_str()) {
                score += PREFIX_START_SCORE;
            } else if candidate.contains(prefix.as_str()) {
                score += PREFIX_CONTAINS_SCORE;
            }
        }

        if let Some(suffix) = &constraints.suffix {
            if candidate.ends_with(suffix.as_str()) {
                score += SUFFIX_END_SCORE;
            } else if candidate.contains(suffix.as_str()) {
                score += SUFFIX_CONTAINS_SCORE;
            }
        }

        score += constraints
            .includes
            .iter()
            .filter(|fragment| candidate.contains(fragment.as_str()))
            .count() as u32
            * INCLUDE_SCORE;

        score
    }

    /// Every entry of the gender's pool with a positive score, best first.
    /// Equal scores keep pool order.
    pub fn rank_candidates(
        &self,
        constraints: &NameConstraints,
        gender: Gender,
    ) -> Vec<ScoredCandidate> {
        let mut ranked: Vec<ScoredCandidate> = self
            .pools
            .for_gender(gender)
            .iter()
            .map(|name| ScoredCandidate {
                name: name.clone(),
                score: Self::score(name, constraints),
            })
            .filter(|candidate| candidate.score > 0)
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// The highest-scoring pool entry, or `None` when nothing scores above zero.
    pub fn find_closest_match(&self, constraints: &NameConstraints, gender: Gender) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;
        for name in self.pools.for_gender(gender) {
            let score = Self::score(name, constraints);
            if score == 0 {
                continue;
            }
            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((name.as_str(), score)),
            }
        }
        best.map(|(name, _)| name)
    }
}
