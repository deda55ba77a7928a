//! Recursive, path-qualified diff computation.
//!
//! The core entry point is [`diff_records`]; [`diff_users`] wraps it with the
//! configured ignore list and an empty prefix.

use crate::config::ReconcileConfig;
use crate::diff::model::DiffEntry;
use crate::json::{join_path, values_equal, UserRecord};
use serde_json::Value;

/// True if `path` equals an entry of `ignore_paths` or is a dotted descendant
/// of one.
pub fn is_ignored(path: &str, ignore_paths: &[String]) -> bool {
    ignore_paths.iter().any(|prefix| {
        path == prefix
            || path
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    })
}

/// Diff two user records using the configured ignore list.
pub fn diff_users(
    client: &UserRecord,
    bootstrap: &UserRecord,
    config: &ReconcileConfig,
) -> Vec<DiffEntry> {
    diff_records(client, bootstrap, "", &config.ignore_paths)
}

/// Diff two records below `prefix`.
///
/// Keys are visited client-first, then bootstrap-only keys. Object pairs are
/// recursed into and never produce an entry of their own; any other pair is
/// compared with [`values_equal`] and emitted when different.
pub fn diff_records(
    client: &UserRecord,
    bootstrap: &UserRecord,
    prefix: &str,
    ignore_paths: &[String],
) -> Vec<DiffEntry> {
    let mut entries = Vec::new();
    diff_into(client, bootstrap, prefix, ignore_paths, &mut entries);
    entries
}

fn diff_into(
    client: &UserRecord,
    bootstrap: &UserRecord,
    prefix: &str,
    ignore_paths: &[String],
    entries: &mut Vec<DiffEntry>,
) {
    let keys = client
        .keys()
        .chain(bootstrap.keys().filter(|k| !client.contains_key(k.as_str())));

    for key in keys {
        let path = join_path(prefix, key);
        if is_ignored(&path, ignore_paths) {
            continue;
        }

        match (client.get(key), bootstrap.get(key)) {
            (Some(Value::Object(a)), Some(Value::Object(b))) => {
                diff_into(a, b, &path, ignore_paths, entries);
            }
            (Some(a), Some(b)) if values_equal(a, b) => {}
            (a, b) => entries.push(DiffEntry::new(path, a.cloned(), b.cloned())),
        }
    }
}
