//! Stable identifier resolution.

use crate::json::UserRecord;
use serde_json::Value;

pub const STABLE_ID_FIELD: &str = "stableID";
pub const CUSTOM_IDS_FIELD: &str = "customIDs";

/// Resolve the stable ID of a user record.
///
/// A direct `stableID` string wins over `customIDs.stableID`. Blank strings
/// (after trimming) and non-string values do not count. There is no other
/// fallback.
pub fn resolve_stable_id(user: Option<&UserRecord>) -> Option<String> {
    let user = user?;
    non_blank(user.get(STABLE_ID_FIELD)).or_else(|| {
        user.get(CUSTOM_IDS_FIELD)
            .and_then(Value::as_object)
            .and_then(|custom_ids| non_blank(custom_ids.get(STABLE_ID_FIELD)))
    })
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    let trimmed = value?.as_str()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
