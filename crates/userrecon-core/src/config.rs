//! Reconciliation configuration.
//!
//! Every knob has a built-in default; a TOML file can override any subset.
//!
//! ```toml
//! metadata_field = "bootstrapMetadata"
//! ignore_paths = ["statsigEnvironment", "custom.sessionStart"]
//! ```

use crate::diff::is_ignored;
use crate::errors::Result;
use crate::extract::UserProbe;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reserved payload field carrying the string-encoded metadata blob.
pub const DEFAULT_METADATA_FIELD: &str = "bootstrapMetadata";

/// Paths excluded from diff output by default (the environment tag).
pub const DEFAULT_IGNORE_PATHS: &[&str] = &["statsigEnvironment"];

/// Keys that hold a complete user object, highest priority first.
pub const DEFAULT_USER_KEYS: &[&str] = &["clientUser", "user", "statsigUser"];

/// Identity-ish fields collected by the fallback scan.
pub const DEFAULT_IDENTITY_FIELDS: &[&str] = &[
    "userID",
    "stableID",
    "customIDs",
    "email",
    "ip",
    "userAgent",
    "country",
    "locale",
    "appVersion",
    "custom",
    "privateAttributes",
    "statsigEnvironment",
];

/// Configuration for a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Name of the string field holding the embedded metadata
    pub metadata_field: String,
    /// Path prefixes suppressed from diff output
    pub ignore_paths: Vec<String>,
    /// Direct user keys probed in order
    pub user_keys: Vec<String>,
    /// Allow-list for the fallback scan
    pub identity_fields: Vec<String>,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            metadata_field: DEFAULT_METADATA_FIELD.to_string(),
            ignore_paths: to_strings(DEFAULT_IGNORE_PATHS),
            user_keys: to_strings(DEFAULT_USER_KEYS),
            identity_fields: to_strings(DEFAULT_IDENTITY_FIELDS),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ReconcileConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// - `Config` — the text is not valid TOML or has mistyped keys
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// - `Io` — the file cannot be read
    /// - `Config` — the file is not a valid configuration
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// True if `path` equals an ignore entry or lies underneath one.
    pub fn is_ignored(&self, path: &str) -> bool {
        is_ignored(path, &self.ignore_paths)
    }

    /// The extraction probes in priority order: each direct key, then the
    /// allow-list scan.
    pub fn probes(&self) -> Vec<UserProbe> {
        self.user_keys
            .iter()
            .map(|key| UserProbe::DirectKey(key.clone()))
            .chain(std::iter::once(UserProbe::AllowList(
                self.identity_fields.clone(),
            )))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReconcileConfig::default();
        assert_eq!(config.metadata_field, "bootstrapMetadata");
        assert_eq!(config.ignore_paths, vec!["statsigEnvironment"]);
        assert_eq!(config.user_keys, vec!["clientUser", "user", "statsigUser"]);
        assert!(config.identity_fields.contains(&"customIDs".to_string()));
    }

    #[test]
    fn test_is_ignored_exact_and_descendants() {
        let config = ReconcileConfig::default();
        assert!(config.is_ignored("statsigEnvironment"));
        assert!(config.is_ignored("statsigEnvironment.tier"));
        assert!(config.is_ignored("statsigEnvironment.tier.name"));
    }

    #[test]
    fn test_is_ignored_requires_dot_boundary() {
        let config = ReconcileConfig::default();
        assert!(!config.is_ignored("statsigEnvironmentX"));
        assert!(!config.is_ignored("custom.statsigEnvironment"));
        assert!(!config.is_ignored("userID"));
    }

    #[test]
    fn test_from_toml_overrides_subset() {
        let config = ReconcileConfig::from_toml_str(
            r#"
            ignore_paths = ["custom.sessionStart"]
            "#,
        )
        .unwrap();
        assert_eq!(config.ignore_paths, vec!["custom.sessionStart"]);
        assert_eq!(config.metadata_field, "bootstrapMetadata");
    }

    #[test]
    fn test_from_toml_rejects_wrong_type() {
        let err = ReconcileConfig::from_toml_str("metadata_field = 3").unwrap_err();
        assert_eq!(err.kind(), crate::errors::ExErrorKind::Config);
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userrecon.toml");
        std::fs::write(&path, "metadata_field = \"initMeta\"\n").unwrap();
        let config = ReconcileConfig::load(&path).unwrap();
        assert_eq!(config.metadata_field, "initMeta");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ReconcileConfig::load(Path::new("/nonexistent/userrecon.toml")).unwrap_err();
        assert_eq!(err.kind(), crate::errors::ExErrorKind::Io);
    }

    #[test]
    fn test_probes_order() {
        let probes = ReconcileConfig::default().probes();
        assert_eq!(probes.len(), 4);
        assert_eq!(probes[0], UserProbe::DirectKey("clientUser".to_string()));
        assert!(matches!(probes[3], UserProbe::AllowList(_)));
    }
}
