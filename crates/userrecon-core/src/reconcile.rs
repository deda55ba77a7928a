//! End-to-end reconciliation of one payload.
//!
//! [`reconcile`] is a pure function of the input text and configuration.
//! [`Reconciler`] wraps it with a single-entry memo keyed by the SHA-256 of the
//! input, for callers that re-run on every edit.

use crate::config::ReconcileConfig;
use crate::diff::{classify, diff_users, DiffEntry};
use crate::errors::ReconError;
use crate::extract::extract_user;
use crate::json::{parse_payload, UserRecord};
use crate::metadata::{parse_metadata, BootstrapResult};
use crate::stable_id::resolve_stable_id;
use crate::{log_op_degraded, log_op_end, log_op_error, log_op_start};
use serde::Serialize;
use sha2::{Digest as _, Sha256};
use std::time::Instant;

/// Everything derived from one input text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reconciliation {
    /// Hex SHA-256 of the input text
    pub input_digest: String,
    /// Set when the input is not valid JSON; everything else is then empty
    pub parse_error: Option<ReconError>,
    /// User record attached directly to the payload
    pub client_user: Option<UserRecord>,
    /// Result of parsing the embedded metadata
    pub bootstrap: BootstrapResult,
    pub client_stable_id: Option<String>,
    pub bootstrap_stable_id: Option<String>,
    /// Every leaf-level difference between the two users
    pub differences: Vec<DiffEntry>,
    /// Bootstrap-only entries plus the stable ID mismatch row, for display
    pub rows: Vec<DiffEntry>,
}

impl Reconciliation {
    /// True if the stable IDs resolved on the two sides disagree.
    pub fn stable_id_mismatch(&self) -> bool {
        self.client_stable_id != self.bootstrap_stable_id
            && (self.client_stable_id.is_some() || self.bootstrap_stable_id.is_some())
    }
}

/// Hex SHA-256 of the input text.
pub fn input_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Reconcile the client and bootstrap users found in `text`.
///
/// Never fails: every data-shape problem is carried on the result.
pub fn reconcile(text: &str, config: &ReconcileConfig) -> Reconciliation {
    let start = Instant::now();
    let digest = input_digest(text);
    log_op_start!("reconcile", input_digest = digest.as_str());

    let payload = match parse_payload(text) {
        Ok(payload) => payload,
        Err(err) => {
            log_op_error!(
                "reconcile",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                input_digest = digest.as_str()
            );
            return Reconciliation {
                input_digest: digest,
                parse_error: Some(err),
                ..Reconciliation::default()
            };
        }
    };

    let client_user = extract_user(&payload, config);
    let bootstrap = parse_metadata(&payload, config);
    if let Some(err) = &bootstrap.error {
        log_op_degraded!(
            "parse_metadata",
            err,
            input_digest = digest.as_str(),
            metadata_field = config.metadata_field.as_str()
        );
    }

    let client_stable_id = resolve_stable_id(client_user.as_ref());
    let bootstrap_stable_id = resolve_stable_id(bootstrap.user.as_ref());

    let empty = UserRecord::new();
    let differences = diff_users(
        client_user.as_ref().unwrap_or(&empty),
        bootstrap.user.as_ref().unwrap_or(&empty),
        config,
    );
    let rows = classify(
        &differences,
        client_user.as_ref(),
        bootstrap.user.as_ref(),
        client_stable_id.as_deref(),
        bootstrap_stable_id.as_deref(),
        config,
    );

    log_op_end!(
        "reconcile",
        duration_ms = start.elapsed().as_millis() as u64,
        input_digest = digest.as_str(),
        diff_len = differences.len() as u64,
        rows_len = rows.len() as u64
    );

    Reconciliation {
        input_digest: digest,
        parse_error: None,
        client_user,
        bootstrap,
        client_stable_id,
        bootstrap_stable_id,
        differences,
        rows,
    }
}

/// Memoizing front-end for [`reconcile`].
///
/// Holds the most recent result; re-running with the same text returns it
/// without recomputation.
#[derive(Debug, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
    last: Option<Reconciliation>,
}

impl Reconciler {
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config, last: None }
    }

    /// Reconcile `text`, reusing the previous result when the input digest
    /// matches.
    pub fn run(&mut self, text: &str) -> &Reconciliation {
        let digest = input_digest(text);
        let hit = self
            .last
            .as_ref()
            .is_some_and(|last| last.input_digest == digest);
        if hit {
            tracing::debug!(
                op = "reconcile",
                event = userrecon_core_types::schema::EVENT_CACHE_HIT,
                input_digest = digest.as_str(),
            );
        } else {
            self.last = Some(reconcile(text, &self.config));
        }
        self.last.get_or_insert_with(Reconciliation::default)
    }
}
