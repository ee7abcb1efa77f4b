//! Blueprint construction: deterministic letter-fragment synthesis from the
//! parents' names.
//!
//! Every rule slices the lowercased names by character (not byte), composes a
//! draft name, and records the fragments it used twice: once as
//! [`NameConstraints`] for fallback scoring and once as a [`RationaleTemplate`]
//! for the human-readable explanation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::NamesmithError;

/// Connector syllable inserted by the girl rule.
pub const GIRL_CONNECTOR: &str = "bi";

/// Confidence assigned by the girl rule.
pub const GIRL_RULE_CONFIDENCE: u8 = 95;
/// Confidence assigned by the boy rule.
pub const BOY_RULE_CONFIDENCE: u8 = 90;
/// Confidence assigned to both blueprints of the ambiguous-gender rule.
pub const SHARED_RULE_CONFIDENCE: u8 = 75;

/// Gender a blueprint (and its resolved name) is offered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Boy => write!(f, "boy"),
            Gender::Girl => write!(f, "girl"),
        }
    }
}

impl FromStr for Gender {
    type Err = NamesmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boy" => Ok(Gender::Boy),
            "girl" => Ok(Gender::Girl),
            other => Err(NamesmithError::validation_field(
                format!("unknown gender '{other}', expected boy or girl"),
                "gender",
            )),
        }
    }
}

/// Caller-side gender filter; `All` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    Boy,
    Girl,
    #[default]
    All,
}

impl GenderFilter {
    /// Whether a blueprint of `gender` passes this filter
    pub fn admits(self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Boy => gender == Gender::Boy,
            GenderFilter::Girl => gender == Gender::Girl,
        }
    }
}

impl From<Gender> for GenderFilter {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Boy => GenderFilter::Boy,
            Gender::Girl => GenderFilter::Girl,
        }
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderFilter::Boy => write!(f, "boy"),
            GenderFilter::Girl => write!(f, "girl"),
            GenderFilter::All => write!(f, "all"),
        }
    }
}

impl FromStr for GenderFilter {
    type Err = NamesmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(GenderFilter::All);
        }
        s.parse::<Gender>().map(GenderFilter::from)
    }
}

/// Fragment constraints used to score fallback pool entries.
///
/// All values are lowercased; empty fragments are stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameConstraints {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    #[serde(default)]
    pub includes: Vec<String>,
}

impl NameConstraints {
    pub fn new(prefix: Option<&str>, suffix: Option<&str>, includes: &[&str]) -> Self {
        Self {
            prefix: normalize_fragment(prefix),
            suffix: normalize_fragment(suffix),
            includes: includes
                .iter()
                .filter_map(|fragment| normalize_fragment(Some(*fragment)))
                .collect(),
        }
    }
}

fn normalize_fragment(fragment: Option<&str>) -> Option<String> {
    fragment
        .map(str::to_lowercase)
        .filter(|fragment| !fragment.is_empty())
}

/// The synthesis rule a blueprint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlueprintRule {
    /// Father's opening syllable + connector + mother's last two letters
    FatherSyllableMotherEnding,
    /// Father's first three letters + a three-letter mix of the mother's name
    FatherChunkMotherMix,
    /// Mother's first two letters + father's last two letters, offered for both genders
    MotherStartFatherEnding,
}

/// Data needed to explain how a blueprint was put together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RationaleTemplate {
    pub rule: BlueprintRule,
    /// Father's name as the caller spelled it
    pub father: String,
    /// Mother's name as the caller spelled it
    pub mother: String,
    pub father_fragment: String,
    pub mother_fragment: String,
    pub connector: Option<String>,
}

/// A candidate name prior to external validation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameBlueprint {
    pub draft_name: String,
    pub gender: Gender,
    pub confidence: u8,
    pub constraints: NameConstraints,
    pub rationale: RationaleTemplate,
}

/// Render the explanation for `blueprint` resolved as `resolved_name`.
///
/// When the resolved name differs from the draft, the text says explicitly
/// that a real name was substituted.
pub fn render_rationale(blueprint: &NameBlueprint, resolved_name: &str) -> String {
    let t = &blueprint.rationale;
    let draft = &blueprint.draft_name;
    let father_fragment = t.father_fragment.to_uppercase();
    let mother_fragment = t.mother_fragment.to_uppercase();

    let base = match t.rule {
        BlueprintRule::FatherSyllableMotherEnding => format!(
            "👧 {draft} = the \"{father_fragment}\" syllable of {}, the soft \"{}\" connector \
             and the closing \"{mother_fragment}\" of {}.",
            t.father,
            t.connector.as_deref().unwrap_or_default(),
            t.mother,
        ),
        BlueprintRule::FatherChunkMotherMix => format!(
            "👦 {draft} = the opening \"{father_fragment}\" of {} followed by \"{mother_fragment}\", \
             letters picked from {} in a fixed order.",
            t.father, t.mother,
        ),
        BlueprintRule::MotherStartFatherEnding => format!(
            "{draft} is an alternative blend: \"{mother_fragment}\" from the start of {} \
             and \"{father_fragment}\" from the end of {}.",
            t.mother, t.father,
        ),
    };

    if resolved_name == draft.as_str() {
        base
    } else {
        format!(
            "{base}\n\n\"{draft}\" is not a registered name, so {resolved_name} was chosen \
             instead: the closest real name sharing its letters."
        )
    }
}

/// Builds blueprints from a pair of parents' names.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlueprintBuilder;

impl BlueprintBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Construct up to four blueprints, in rule order: girl, boy, then the
    /// shared girl/boy pair.
    ///
    /// Inputs are expected trimmed and non-empty; short names degrade to
    /// whatever characters exist and rules with empty fragments are skipped.
    pub fn build(&self, father: &str, mother: &str) -> Vec<NameBlueprint> {
        let f = Letters::new(father);
        let m = Letters::new(mother);

        let father_first = f.at(0);
        let father_second = f.at(1);
        let father_last_two = f.last(2);
        let father_chunk = f.first(3);

        let mother_last_two = m.last(2);
        let mother_first_two = m.first(2);
        let mother_mix = [m.penultimate(), m.at(1), m.at(0)].concat();

        let mut blueprints = Vec::with_capacity(4);

        if !father_first.is_empty() && !mother_last_two.is_empty() {
            let syllable = format!("{father_first}{father_second}");
            let draft_name = compose_name(&[
                father_first.as_str(),
                father_second.as_str(),
                GIRL_CONNECTOR,
                mother_last_two.as_str(),
            ]);
            if !draft_name.is_empty() {
                blueprints.push(NameBlueprint {
                    draft_name,
                    gender: Gender::Girl,
                    confidence: GIRL_RULE_CONFIDENCE,
                    constraints: NameConstraints::new(
                        Some(syllable.as_str()),
                        Some(mother_last_two.as_str()),
                        &[GIRL_CONNECTOR],
                    ),
                    rationale: RationaleTemplate {
                        rule: BlueprintRule::FatherSyllableMotherEnding,
                        father: father.to_string(),
                        mother: mother.to_string(),
                        father_fragment: syllable,
                        mother_fragment: mother_last_two.clone(),
                        connector: Some(GIRL_CONNECTOR.to_string()),
                    },
                });
            }
        }

        if !father_chunk.is_empty() && !mother_mix.is_empty() {
            let draft_name = compose_name(&[father_chunk.as_str(), mother_mix.as_str()]);
            if !draft_name.is_empty() {
                blueprints.push(NameBlueprint {
                    draft_name,
                    gender: Gender::Boy,
                    confidence: BOY_RULE_CONFIDENCE,
                    constraints: NameConstraints::new(
                        Some(father_chunk.as_str()),
                        Some(mother_mix.as_str()),
                        &[],
                    ),
                    rationale: RationaleTemplate {
                        rule: BlueprintRule::FatherChunkMotherMix,
                        father: father.to_string(),
                        mother: mother.to_string(),
                        father_fragment: father_chunk.clone(),
                        mother_fragment: mother_mix.clone(),
                        connector: None,
                    },
                });
            }
        }

        if !mother_first_two.is_empty() && !father_last_two.is_empty() {
            let draft_name = compose_name(&[mother_first_two.as_str(), father_last_two.as_str()]);
            if !draft_name.is_empty() {
                let constraints = NameConstraints::new(
                    Some(mother_first_two.as_str()),
                    Some(father_last_two.as_str()),
                    &[],
                );
                let rationale = RationaleTemplate {
                    rule: BlueprintRule::MotherStartFatherEnding,
                    father: father.to_string(),
                    mother: mother.to_string(),
                    father_fragment: father_last_two.clone(),
                    mother_fragment: mother_first_two.clone(),
                    connector: None,
                };
                for gender in [Gender::Girl, Gender::Boy] {
                    blueprints.push(NameBlueprint {
                        draft_name: draft_name.clone(),
                        gender,
                        confidence: SHARED_RULE_CONFIDENCE,
                        constraints: constraints.clone(),
                        rationale: rationale.clone(),
                    });
                }
            }
        }

        blueprints
    }
}

/// Concatenate the non-empty parts, capitalize the first character and
/// lowercase the rest.
pub fn compose_name(parts: &[&str]) -> String {
    let raw: String = parts.iter().filter(|p| !p.is_empty()).copied().collect();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Character view of a lowercased name.
struct Letters(Vec<char>);

impl Letters {
    fn new(name: &str) -> Self {
        Self(name.to_lowercase().chars().collect())
    }

    fn at(&self, index: usize) -> String {
        self.0.get(index).map(char::to_string).unwrap_or_default()
    }

    fn first(&self, n: usize) -> String {
        self.0.iter().take(n).collect()
    }

    fn last(&self, n: usize) -> String {
        self.0[self.0.len().saturating_sub(n)..].iter().collect()
    }

    /// Second-to-last letter, empty for names shorter than two letters.
    fn penultimate(&self) -> String {
        match self.0.len() {
            len if len >= 2 => self.0[len - 2].to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafts(blueprints: &[NameBlueprint]) -> Vec<(&str, Gender, u8)> {
        blueprints
            .iter()
            .map(|bp| (bp.draft_name.as_str(), bp.gender, bp.confidence))
            .collect()
    }

    #[test]
    fn olim_and_dildora_produce_exact_slices() {
        let blueprints = BlueprintBuilder::new().build("Olim", "Dildora");

        assert_eq!(
            drafts(&blueprints),
            vec![
                ("Olbira", Gender::Girl, 95),
                ("Olirid", Gender::Boy, 90),
                ("Diim", Gender::Girl, 75),
                ("Diim", Gender::Boy, 75),
            ]
        );
    }

    #[test]
    fn constraints_mirror_fragments() {
        let blueprints = BlueprintBuilder::new().build("Olim", "Dildora");

        assert_eq!(
            blueprints[0].constraints,
            NameConstraints {
                prefix: Some("ol".into()),
                suffix: Some("ra".into()),
                includes: vec!["bi".into()],
            }
        );
        assert_eq!(blueprints[1].constraints.prefix.as_deref(), Some("oli"));
        assert_eq!(blueprints[1].constraints.suffix.as_deref(), Some("rid"));
        assert!(blueprints[1].constraints.includes.is_empty());
        assert_eq!(blueprints[2].constraints, blueprints[3].constraints);
        assert!(blueprints[2].constraints.includes.is_empty());
    }

    #[test]
    fn boy_constraints_only_use_draft_fragments() {
        let blueprints = BlueprintBuilder::new().build("Kamoliddin", "Nodira");
        let boy = &blueprints[1];

        assert_eq!(boy.draft_name, "Kamron");
        assert_eq!(
            boy.constraints,
            NameConstraints {
                prefix: Some("kam".into()),
                suffix: Some("ron".into()),
                includes: Vec::new(),
            }
        );
        // mother's opening letters are not part of the boy draft
        assert!(!boy.constraints.includes.contains(&"no".to_string()));
    }

    #[test]
    fn single_letter_names_degrade_without_panicking() {
        let blueprints = BlueprintBuilder::new().build("A", "B");

        // girl: "a" + "" + "bi" + "b"; boy: "a" + ("" + "" + "b"); shared: "b" + "a"
        assert_eq!(
            drafts(&blueprints),
            vec![
                ("Abib", Gender::Girl, 95),
                ("Ab", Gender::Boy, 90),
                ("Ba", Gender::Girl, 75),
                ("Ba", Gender::Boy, 75),
            ]
        );
        assert_eq!(blueprints[0].constraints.prefix.as_deref(), Some("a"));
    }

    #[test]
    fn slicing_counts_characters_not_bytes() {
        let blueprints = BlueprintBuilder::new().build("Şükür", "Gülnoza");
        assert_eq!(blueprints[0].draft_name, "Şübiza");
        assert_eq!(blueprints[1].draft_name, "Şükzüg");
    }

    #[test]
    fn mixed_case_input_is_normalized() {
        let blueprints = BlueprintBuilder::new().build("kAMOLIDDIN", "NODIRA");
        assert_eq!(blueprints[0].draft_name, "Kabira");
        assert_eq!(blueprints[1].draft_name, "Kamron");
        assert_eq!(blueprints[0].rationale.father, "kAMOLIDDIN");
    }

    #[test]
    fn compose_name_capitalizes_and_skips_empty_parts() {
        assert_eq!(compose_name(&["", "sA", "", "RDOR"]), "Sardor");
        assert_eq!(compose_name(&["", ""]), "");
    }

    #[test]
    fn rationale_mentions_fragments_and_substitution() {
        let blueprints = BlueprintBuilder::new().build("Olim", "Dildora");
        let girl = &blueprints[0];

        let exact = render_rationale(girl, "Olbira");
        assert!(exact.contains("\"OL\""));
        assert!(exact.contains("\"RA\""));
        assert!(exact.contains("Dildora"));
        assert!(!exact.contains("not a registered name"));

        let substituted = render_rationale(girl, "Kabira");
        assert!(substituted.starts_with(&exact));
        assert!(substituted.contains("Kabira"));
        assert!(substituted.contains("not a registered name"));
    }

    #[test]
    fn gender_filter_parsing() {
        assert_eq!("ALL".parse::<GenderFilter>().unwrap(), GenderFilter::All);
        assert_eq!(" girl ".parse::<GenderFilter>().unwrap(), GenderFilter::Girl);
        assert!("other".parse::<GenderFilter>().is_err());
        assert!(GenderFilter::Boy.admits(Gender::Boy));
        assert!(!GenderFilter::Boy.admits(Gender::Girl));
        assert!(GenderFilter::All.admits(Gender::Girl));
    }
}
