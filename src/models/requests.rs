//! Request DTOs for the proxy API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.
//! Fields default to empty so that missing values surface as 400 responses
//! from `validate` rather than extractor rejections.

use serde::Deserialize;

/// Request body for POST /cache/update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    /// The cache key
    #[serde(default)]
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: String,
}

impl UpdateRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key_value(&self.key, &self.value)
    }
}

/// Query string for GET /cache/set
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetQuery {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl SetQuery {
    pub fn validate(&self) -> Option<String> {
        validate_key_value(&self.key, &self.value)
    }
}

/// Query string for DELETE /cache/delete
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyQuery {
    #[serde(default)]
    pub key: String,
}

impl KeyQuery {
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key is required".to_string());
        }
        None
    }
}

/// Query string for POST /cache/resize
///
/// `size` is kept as text so that non-numeric input yields the same 400 as
/// a non-positive one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResizeQuery {
    pub size: Option<String>,
}

impl ResizeQuery {
    /// Parses the requested capacity, which must be an integer of at least 1.
    pub fn capacity(&self) -> Result<usize, String> {
        let raw = self.size.as_deref().map(str::trim).unwrap_or_default();
        match raw.parse::<i64>() {
            Ok(size) if size > 0 => usize::try_from(size).map_err(|_| invalid_size(raw)),
            _ => Err(invalid_size(raw)),
        }
    }
}

fn invalid_size(raw: &str) -> String {
    format!("Invalid cache size '{}': expected a positive integer", raw)
}

fn validate_key_value(key: &str, value: &str) -> Option<String> {
    if key.is_empty() || value.is_empty() {
        return Some("Key and value are required".to_string());
    }
    None
}
