//! Name synthesis from parents' names.
//!
//! - [`blueprint`]: deterministic draft construction
//! - [`fallback`]: closest real name from curated pools
//! - [`resolver`]: exact lookup, fallback lookup, dedup

pub mod blueprint;
pub mod fallback;
pub mod resolver;

pub use blueprint::{
    compose_name, render_rationale, BlueprintBuilder, BlueprintRule, Gender, GenderFilter,
    NameBlueprint, NameConstraints, RationaleTemplate,
};
pub use fallback::{FallbackMatcher, FallbackNamePools, ScoredCandidate};
pub use resolver::{GeneratedName, NameGenerator};
