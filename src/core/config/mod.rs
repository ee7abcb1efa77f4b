//! Configuration types and management for namesmith.
//!
//! The configuration is a single YAML document with three sections: the
//! name-meaning lookup service, the curated fallback pools, and the payment
//! provider identifiers. Every section has working defaults so an empty file
//! (or no file at all) yields a usable setup.

pub mod validation;


use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{NamesmithError, Result};
use crate::generator::fallback::FallbackNamePools;

pub use validation::{
    validate_absolute_url, validate_no_blank_entries, validate_non_empty, validate_positive_u32,
    validate_positive_u64,
};

/// Environment variable overriding the lookup endpoint.
pub const ENV_LOOKUP_URL: &str = "NAMESMITH_LOOKUP_URL";
/// Environment variable carrying the Click service identifier.
pub const ENV_CLICK_SERVICE_ID: &str = "CLICK_SERVICE_ID";
/// Environment variable carrying the Click merchant identifier.
pub const ENV_CLICK_MERCHANT_ID: &str = "CLICK_MERCHANT_ID";
/// Environment variable carrying the Click merchant user identifier.
pub const ENV_CLICK_MERCHANT_USER_ID: &str = "CLICK_MERCHANT_USER_ID";
/// Environment variable overriding the post-payment return URL.
pub const ENV_BOT_URL: &str = "BOT_URL";

/// Main configuration for namesmith
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamesmithConfig {
    /// Name-meaning lookup service settings
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Curated real names used when a synthesized draft has no match
    #[serde(default)]
    pub pools: FallbackNamePools,

    /// Payment provider identifiers
    #[serde(default)]
    pub payment: PaymentConfig,
}

/// Configuration construction and I/O methods for [`NamesmithConfig`].
impl NamesmithConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            NamesmithError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            NamesmithError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Overlay values taken from the process environment.
    ///
    /// Unset or blank variables leave the current value untouched.
    pub fn apply_env_overrides(&mut self) {
        if let Some(endpoint) = env_value(ENV_LOOKUP_URL) {
            debug!("lookup endpoint overridden from environment");
            self.lookup.endpoint = endpoint;
        }
        if let Some(service_id) = env_value(ENV_CLICK_SERVICE_ID) {
            self.payment.service_id = service_id;
        }
        if let Some(merchant_id) = env_value(ENV_CLICK_MERCHANT_ID) {
            self.payment.merchant_id = merchant_id;
        }
        if let Some(merchant_user_id) = env_value(ENV_CLICK_MERCHANT_USER_ID) {
            self.payment.merchant_user_id = merchant_user_id;
        }
        if let Some(return_url) = env_value(ENV_BOT_URL) {
            self.payment.return_url = return_url;
        }
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.lookup.validate()?;
        self.pools.validate()?;
        self.payment.validate()?;
        Ok(())
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Name-meaning lookup service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Endpoint queried with `lang_id` and `name` parameters
    #[serde(default = "LookupConfig::default_endpoint")]
    pub endpoint: String,

    /// Language identifier sent as `lang_id`
    #[serde(default = "LookupConfig::default_lang_id")]
    pub lang_id: u32,

    /// Per-request timeout in seconds
    #[serde(default = "LookupConfig::default_timeout_secs")]
    pub timeout_secs: u64,

    /// Case-insensitive marker the service uses for unknown names
    #[serde(default = "LookupConfig::default_not_found_marker")]
    pub not_found_marker: String,

    /// Origin reported when the response carries no parenthesized origin
    #[serde(default = "LookupConfig::default_origin")]
    pub default_origin: String,

    /// Meaning reported when the name exists but the response has no description
    #[serde(default = "LookupConfig::default_no_meaning_text")]
    pub no_meaning_text: String,
}

/// Default implementation for [`LookupConfig`].
impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            lang_id: Self::default_lang_id(),
            timeout_secs: Self::default_timeout_secs(),
            not_found_marker: Self::default_not_found_marker(),
            default_origin: Self::default_origin(),
            no_meaning_text: Self::default_no_meaning_text(),
        }
    }
}

/// Default values and validation for [`LookupConfig`].
impl LookupConfig {
    fn default_endpoint() -> String {
        "http://94.158.53.20:8080/names_content.php".to_string()
    }

    const fn default_lang_id() -> u32 {
        1
    }

    const fn default_timeout_secs() -> u64 {
        5
    }

    fn default_not_found_marker() -> String {
        "topilmadi".to_string()
    }

    fn default_origin() -> String {
        "Ma'lumot bazasi".to_string()
    }

    fn default_no_meaning_text() -> String {
        "This name exists in the registry, but no detailed meaning is recorded.".to_string()
    }

    /// Request timeout as a [`std::time::Duration`]
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }

    /// Validate lookup configuration
    pub fn validate(&self) -> Result<()> {
        validate_absolute_url(&self.endpoint, "lookup.endpoint")?;
        validate_positive_u32(self.lang_id, "lookup.lang_id")?;
        validate_positive_u64(self.timeout_secs, "lookup.timeout_secs")?;
        validate_non_empty(&self.not_found_marker, "lookup.not_found_marker")?;
        validate_non_empty(&self.default_origin, "lookup.default_origin")?;
        validate_non_empty(&self.no_meaning_text, "lookup.no_meaning_text")?;
        Ok(())
    }
}

/// Click payment provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Provider payment page
    #[serde(default = "PaymentConfig::default_provider_url")]
    pub provider_url: String,

    /// Click service identifier
    #[serde(default)]
    pub service_id: String,

    /// Click merchant identifier
    #[serde(default)]
    pub merchant_id: String,

    /// Click merchant user identifier (redirect links only)
    #[serde(default)]
    pub merchant_user_id: String,

    /// Where the provider sends the payer afterwards
    #[serde(default = "PaymentConfig::default_return_url")]
    pub return_url: String,
}

/// Default implementation for [`PaymentConfig`].
impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            provider_url: Self::default_provider_url(),
            service_id: String::new(),
            merchant_id: String::new(),
            merchant_user_id: String::new(),
            return_url: Self::default_return_url(),
        }
    }
}

/// Default values and validation for [`PaymentConfig`].
impl PaymentConfig {
    fn default_provider_url() -> String {
        "https://my.click.uz/services/pay".to_string()
    }

    fn default_return_url() -> String {
        "https://t.me/n17kamolBot".to_string()
    }

    /// Validate payment configuration.
    ///
    /// Merchant identifiers may be empty here; they are usually injected from
    /// the environment right before links are built.
    pub fn validate(&self) -> Result<()> {
        validate_absolute_url(&self.provider_url, "payment.provider_url")?;
        validate_absolute_url(&self.return_url, "payment.return_url")?;
        Ok(())
    }
}
