//! Embedded metadata sanitizing and parsing.
//!
//! The payload carries a string field (by default `bootstrapMetadata`) holding
//! a JSON document that was escaped one level too many somewhere upstream.
//! Sanitizing removes every backslash outright. This is lossy: a legitimately
//! escaped quote or backslash inside a string value is corrupted too, which
//! then shows up as a parse error on the result.

use crate::config::ReconcileConfig;
use crate::errors::ReconError;
use crate::extract::extract_user;
use crate::json::UserRecord;
use serde::Serialize;
use serde_json::Value;

/// Everything derived from the embedded metadata string.
///
/// All fields are `None`/`false` when the payload is not an object; that case
/// is "not applicable" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BootstrapResult {
    /// Parsed metadata document
    pub metadata: Option<Value>,
    /// User record derived from the metadata
    pub user: Option<UserRecord>,
    /// Metadata string after backslash removal
    pub sanitized: Option<String>,
    /// Metadata string as found on the payload
    pub raw: Option<String>,
    /// True if sanitizing changed the string
    pub cleaned: bool,
    /// Why nothing (or only the strings) could be derived
    pub error: Option<ReconError>,
}

impl BootstrapResult {
    fn failed(error: ReconError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Remove every backslash from `raw`. Returns the result and whether anything
/// was removed.
pub fn sanitize(raw: &str) -> (String, bool) {
    let sanitized: String = raw.chars().filter(|c| *c != '\\').collect();
    let cleaned = sanitized.len() != raw.len();
    (sanitized, cleaned)
}

/// Locate, sanitize and parse the metadata field of `payload`, then derive the
/// bootstrap-side user from it.
pub fn parse_metadata(payload: &Value, config: &ReconcileConfig) -> BootstrapResult {
    let Some(object) = payload.as_object() else {
        return BootstrapResult::default();
    };

    let field = &config.metadata_field;
    let raw = match object.get(field) {
        None => {
            return BootstrapResult::failed(ReconError::MetadataFieldNotFound {
                field: field.clone(),
            })
        }
        Some(Value::String(raw)) => raw,
        Some(_) => {
            return BootstrapResult::failed(ReconError::MetadataNotString {
                field: field.clone(),
            })
        }
    };

    let (sanitized, cleaned) = sanitize(raw);
    if cleaned {
        tracing::debug!(
            metadata_field = field.as_str(),
            removed = raw.len() - sanitized.len(),
            "stripped backslashes from metadata"
        );
    }

    let metadata: Value = match serde_json::from_str(&sanitized) {
        Ok(metadata) => metadata,
        Err(e) => {
            return BootstrapResult {
                sanitized: Some(sanitized),
                raw: Some(raw.clone()),
                cleaned,
                error: Some(ReconError::MetadataParse {
                    field: field.clone(),
                    message: e.to_string(),
                }),
                ..BootstrapResult::default()
            }
        }
    };

    let user = match metadata.get("user") {
        Some(Value::Object(user)) => Some(user.clone()),
        _ => extract_user(&metadata, config),
    };

    BootstrapResult {
        metadata: Some(metadata),
        user,
        sanitized: Some(sanitized),
        raw: Some(raw.clone()),
        cleaned,
        error: None,
    }
}
