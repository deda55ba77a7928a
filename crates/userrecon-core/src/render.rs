//! Human-readable summary renderer for reconciliations.

use crate::diff::DiffEntry;
use crate::reconcile::Reconciliation;
use serde_json::Value;

/// Render a Markdown/text summary of a [`Reconciliation`].
///
/// Informational only; the structured result is the contract. `rows` picks
/// which list is listed (the display rows or the full differences).
pub fn render_summary(result: &Reconciliation, rows: &[DiffEntry]) -> String {
    let mut out = String::new();
    out.push_str("## User Reconciliation\n\n");

    if let Some(err) = &result.parse_error {
        out.push_str(&format!("**Input error**: {}\n", err));
        return out;
    }

    // Stable IDs
    out.push_str(&format!(
        "| | Stable ID |\n|---|---|\n| Client | {} |\n| Bootstrap | {} |\n\n",
        id_cell(result.client_stable_id.as_deref()),
        id_cell(result.bootstrap_stable_id.as_deref()),
    ));
    if result.stable_id_mismatch() {
        out.push_str("**Stable ID mismatch**\n\n");
    }

    // Sides
    if result.client_user.is_none() {
        out.push_str("- Client user: _not found_\n");
    }
    match (&result.bootstrap.error, &result.bootstrap.user) {
        (Some(err), _) => out.push_str(&format!("- Bootstrap: {}\n", err)),
        (None, None) => out.push_str("- Bootstrap user: _not found_\n"),
        (None, Some(_)) => {}
    }
    if result.bootstrap.cleaned {
        out.push_str("- Bootstrap metadata was unescaped before parsing\n");
    }
    if !out.ends_with("\n\n") {
        out.push('\n');
    }

    if rows.is_empty() {
        out.push_str("_No differences._\n");
        return out;
    }

    out.push_str(&format!("### Differences ({})\n\n", rows.len()));
    for row in rows {
        out.push_str(&format!(
            "{} `{}`: {} -> {}\n",
            row.status.marker(),
            row.path,
            value_cell(row.client_value.as_ref()),
            value_cell(row.bootstrap_value.as_ref()),
        ));
    }
    out
}

fn id_cell(id: Option<&str>) -> String {
    id.map(|id| format!("`{}`", id))
        .unwrap_or_else(|| "_none_".to_string())
}

fn value_cell(value: Option<&Value>) -> String {
    match value {
        None => "_absent_".to_string(),
        Some(value) => serde_json::to_string(value).unwrap_or_else(|_| value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReconcileConfig;
    use crate::reconcile::reconcile;

    #[test]
    fn test_parse_error_summary() {
        let result = reconcile("nope", &ReconcileConfig::default());
        let text = render_summary(&result, &result.rows);
        assert!(text.contains("**Input error**: Invalid JSON"));
    }

    #[test]
    fn test_rows_are_listed_with_markers() {
        let text = r#"{"userID":"u1","bootstrapMetadata":"{\"user\":{\"userID\":\"u1\",\"stableID\":\"s1\"}}"}"#;
        let result = reconcile(text, &ReconcileConfig::default());
        let summary = render_summary(&result, &result.rows);
        assert!(summary.contains("| Bootstrap | `s1` |"));
        assert!(summary.contains("**Stable ID mismatch**"));
        assert!(summary.contains("+ `stableID`: _absent_ -> \"s1\""));
        assert!(summary.contains("~ `stableID`: _absent_ -> \"s1\""));
    }

    #[test]
    fn test_missing_metadata_is_reported() {
        let result = reconcile(r#"{"userID":"u1"}"#, &ReconcileConfig::default());
        let summary = render_summary(&result, &result.rows);
        assert!(summary.contains("- Bootstrap: bootstrapMetadata field not found"));
        assert!(summary.contains("_No differences._"));
    }
}
