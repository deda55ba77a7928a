//! userrecon core - client/bootstrap user reconciliation
//!
//! Given one event payload as text, this crate:
//! - locates the user object attached directly to the payload (client side)
//! - unescapes and parses the embedded metadata string and derives a second
//!   user object from it (bootstrap side)
//! - resolves the stable ID on each side
//! - diffs the two users with path-qualified entries and reduces the diff to
//!   bootstrap-only fields plus a dedicated stable ID mismatch row
//!
//! Everything is synchronous and pure; data-shape problems are reported on the
//! result, never raised.

pub mod config;
pub mod diff;
pub mod errors;
pub mod extract;
pub mod json;
pub mod logging_facility;
pub mod metadata;
pub mod reconcile;
pub mod render;
pub mod stable_id;

// Re-export commonly used types
pub use config::ReconcileConfig;
pub use diff::{DiffEntry, DiffStatus};
pub use errors::{ExError, ExErrorKind, ReconError, Result};
pub use json::UserRecord;
pub use metadata::BootstrapResult;
pub use reconcile::{reconcile, Reconciler, Reconciliation};
pub use render::render_summary;
