//! Validation helper functions for configuration types.

use url::Url;

use crate::core::errors::{NamesmithError, Result};

/// Validate that a u32 value is greater than zero.
pub fn validate_positive_u32(value: u32, field: &str) -> Result<()> {
    if value == 0 {
        return Err(NamesmithError::validation_field(
            format!("{} must be greater than 0", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a u64 value is greater than zero.
pub fn validate_positive_u64(value: u64, field: &str) -> Result<()> {
    if value == 0 {
        return Err(NamesmithError::validation_field(
            format!("{} must be greater than 0", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a string is not blank.
pub fn validate_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NamesmithError::validation_field(
            format!("{} must not be empty", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a string parses as an absolute URL with a host.
pub fn validate_absolute_url(value: &str, field: &str) -> Result<()> {
    let parsed = Url::parse(value).map_err(|e| {
        NamesmithError::config_field(format!("{} is not a valid URL: {}", field, e), field)
    })?;
    if !parsed.has_host() {
        return Err(NamesmithError::config_field(
            format!("{} must include a host", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that no entry of a list is blank.
pub fn validate_no_blank_entries(values: &[String], field: &str) -> Result<()> {
    if let Some(index) = values.iter().position(|v| v.trim().is_empty()) {
        return Err(NamesmithError::validation_field(
            format!("{}[{}] must not be blank", field, index),
            field,
        ));
    }
    Ok(())
}
