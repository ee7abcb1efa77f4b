//! # Namesmith: baby names from parents' names
//!
//! Namesmith blends letter fragments of the father's and mother's names into
//! draft names, validates each draft against an external name-meaning
//! registry, and falls back to the closest real name from a curated pool when
//! a draft is unknown.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 NameGenerator::generate                  │
//! ├───────────────┬──────────────────┬───────────────────────┤
//! │  Blueprints   │  Fallback pools  │  Registry lookup      │
//! │ • girl rule   │ • prefix/suffix  │ • HTTP GET            │
//! │ • boy rule    │   scoring        │ • free-text parsing   │
//! │ • shared rule │ • stable ties    │ • failures → None     │
//! └───────────────┴──────────────────┴───────────────────────┘
//! ```
//!
//! The [`payment`] module builds Click payment links for the hosting bot and
//! is independent of the generator.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use namesmith::{GenderFilter, NameGenerator, NamesmithConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NamesmithConfig::default();
//!     let generator = NameGenerator::from_config(&config)?;
//!
//!     for name in generator.generate("Olim", "Dildora", GenderFilter::All).await {
//!         println!("{} ({}): {}", name.name, name.gender, name.origin);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// Shared infrastructure
pub mod core {
    //! Configuration and error handling shared by all modules.

    pub mod config;
    pub mod errors;
}

pub mod generator;
pub mod lookup;
pub mod payment;

// Re-export primary types for convenience
pub use core::config::NamesmithConfig;
pub use core::errors::{NamesmithError, NamesmithResultExt, Result};
pub use generator::{
    BlueprintBuilder, FallbackMatcher, FallbackNamePools, Gender, GenderFilter, GeneratedName,
    NameBlueprint, NameConstraints, NameGenerator,
};
pub use lookup::{HttpNameLookup, LookupResult, NameLookup};
pub use payment::{ClickLinkBuilder, PaymentRequest};
