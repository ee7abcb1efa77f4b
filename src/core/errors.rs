//! Error types for the namesmith library.
//!
//! Name generation itself never fails: lookup problems degrade into "not found"
//! and unresolved blueprints are dropped. The variants here cover the surfaces
//! that do fail hard, namely configuration loading and payment-link validation.

use std::io;

use thiserror::Error;

/// Main result type for namesmith operations.
pub type Result<T> = std::result::Result<T, NamesmithError>;

/// Error type for all namesmith operations.
#[derive(Error, Debug)]
pub enum NamesmithError {
    /// I/O related errors (config files, output)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being handled
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// HTTP transport errors talking to the lookup service
    #[error("HTTP error while {context}: {message}")]
    Http {
        /// What the client was doing
        context: String,
        /// Error description
        message: String,
    },

    /// Payment amount rejected before reaching the provider
    #[error("Invalid payment amount: {amount}")]
    InvalidAmount {
        /// Offending amount, as received
        amount: String,
    },
}

impl NamesmithError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new validation error tied to a named field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new HTTP error
    pub fn http(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Http {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid amount error
    pub fn invalid_amount(amount: impl ToString) -> Self {
        Self::InvalidAmount {
            amount: amount.to_string(),
        }
    }
}

impl From<io::Error> for NamesmithError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for NamesmithError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for NamesmithError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<url::ParseError> for NamesmithError {
    fn from(err: url::ParseError) -> Self {
        Self::config(format!("Invalid URL: {err}"))
    }
}

/// Result extension trait for mapping foreign errors with context
pub trait NamesmithResultExt<T> {
    /// Map a transport error into [`NamesmithError::Http`]
    fn map_http_err(self, context: &str) -> Result<T>;
}

impl<T, E> NamesmithResultExt<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn map_http_err(self, context: &str) -> Result<T> {
        self.map_err(|e| NamesmithError::http(context, e.to_string()))
    }
}
