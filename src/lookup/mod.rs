//! Name-meaning lookup against the external registry service.
//!
//! The registry answers a `GET ?lang_id=..&name=..` with a free-text body.
//! [`parser`] turns that body into a [`LookupResult`]; [`client`] owns the HTTP
//! transport. Every failure on this path collapses into `None`.

pub mod client;
pub mod parser;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use client::HttpNameLookup;
pub use parser::{parse_lookup_response, ResponseFormat};

/// Meaning and origin of a name known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub meaning: String,
    pub origin: String,
}

/// Source of name meanings.
///
/// Implementations must absorb their own failures: `None` means "not found",
/// whether the registry said so or could not be reached.
#[async_trait]
pub trait NameLookup: Send + Sync {
    async fn lookup(&self, name: &str) -> Option<LookupResult>;
}

#[async_trait]
impl<T: NameLookup + ?Sized> NameLookup for std::sync::Arc<T> {
    async fn lookup(&self, name: &str) -> Option<LookupResult> {
        (**self).lookup(name).await
    }
}
