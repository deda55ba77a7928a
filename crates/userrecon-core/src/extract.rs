//! Heuristic user extraction from an arbitrarily shaped payload.
//!
//! Extraction runs an ordered list of [`UserProbe`]s; the first probe that
//! yields a record wins. Reordering or adding probes is a configuration change.

use crate::config::ReconcileConfig;
use crate::json::UserRecord;
use serde_json::Value;

/// One extraction strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserProbe {
    /// Return the value under this key verbatim if it is an object
    DirectKey(String),
    /// Collect every listed key present on the payload into a new record
    AllowList(Vec<String>),
}

impl UserProbe {
    /// Apply this probe to a payload object.
    pub fn probe(&self, payload: &UserRecord) -> Option<UserRecord> {
        match self {
            UserProbe::DirectKey(key) => payload.get(key).and_then(Value::as_object).cloned(),
            UserProbe::AllowList(fields) => {
                let collected: UserRecord = fields
                    .iter()
                    .filter_map(|field| {
                        payload
                            .get(field)
                            .map(|value| (field.clone(), value.clone()))
                    })
                    .collect();
                if collected.is_empty() {
                    None
                } else {
                    Some(collected)
                }
            }
        }
    }
}

/// Locate a user record inside `payload`.
///
/// Returns `None` when the payload is not an object or no probe matches;
/// that is an expected, displayable state rather than an error.
pub fn extract_user(payload: &Value, config: &ReconcileConfig) -> Option<UserRecord> {
    let object = payload.as_object()?;
    config.probes().iter().find_map(|probe| probe.probe(object))
}
