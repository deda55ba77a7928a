//! User record diff engine.
//!
//! Compares the client-side and bootstrap-side user records and produces a
//! flat list of leaf-level differences, each carrying its full dotted path so
//! a consumer never has to re-walk either tree.
//!
//! ## Entry points
//!
//! ```ignore
//! use userrecon_core::diff::{classify, diff_users};
//!
//! let differences = diff_users(&client, &bootstrap, &config);
//! let rows = classify(&differences, Some(&client), Some(&bootstrap), sid_a, sid_b, &config);
//! ```
//!
//! ## Guarantees
//!
//! - **Reflexivity**: diffing a record against itself yields no entries.
//! - **Unique paths**: one diff run never emits two entries for the same path,
//!   as long as no key contains a `.`. Paths are joined with `.` unescaped, so
//!   a literal key `"a.b"` and the nested key `b` under `"a"` both report as
//!   `a.b`.
//! - **Ignore suppression**: nothing at or below an ignored path is reported.

pub mod classify;
pub mod engine;
pub mod model;

pub use classify::classify;
pub use engine::{diff_records, diff_users, is_ignored};
pub use model::{DiffEntry, DiffStatus};
