//! Reduce a full diff to the rows worth showing.

use crate::config::ReconcileConfig;
use crate::diff::model::{DiffEntry, DiffStatus};
use crate::json::UserRecord;
use crate::stable_id::{CUSTOM_IDS_FIELD, STABLE_ID_FIELD};
use serde_json::Value;

/// Build the display list.
///
/// Keeps only bootstrap-only (`Added`) entries outside the ignore list, then
/// appends one `Changed` row when the resolved stable IDs disagree and at
/// least one side has one. That row is labelled `customIDs.stableID` when
/// either user carries a `customIDs` field, `stableID` otherwise.
pub fn classify(
    differences: &[DiffEntry],
    client_user: Option<&UserRecord>,
    bootstrap_user: Option<&UserRecord>,
    client_stable_id: Option<&str>,
    bootstrap_stable_id: Option<&str>,
    config: &ReconcileConfig,
) -> Vec<DiffEntry> {
    let mut rows: Vec<DiffEntry> = differences
        .iter()
        .filter(|entry| entry.status == DiffStatus::Added && !config.is_ignored(&entry.path))
        .cloned()
        .collect();

    let mismatch = client_stable_id != bootstrap_stable_id
        && (client_stable_id.is_some() || bootstrap_stable_id.is_some());
    if mismatch {
        let has_custom_ids = [client_user, bootstrap_user]
            .into_iter()
            .flatten()
            .any(|user| user.contains_key(CUSTOM_IDS_FIELD));
        let path = if has_custom_ids {
            format!("{}.{}", CUSTOM_IDS_FIELD, STABLE_ID_FIELD)
        } else {
            STABLE_ID_FIELD.to_string()
        };
        rows.push(DiffEntry {
            path,
            status: DiffStatus::Changed,
            client_value: client_stable_id.map(|s| Value::String(s.to_string())),
            bootstrap_value: bootstrap_stable_id.map(|s| Value::String(s.to_string())),
        });
    }

    rows
}
