//! Diff output types.

use serde::Serialize;
use serde_json::Value;

/// Which side of the comparison lacks the value.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    /// Present on the bootstrap side only
    Added,
    /// Present on the client side only
    Removed,
    /// Present on both sides with different values
    Changed,
}

impl DiffStatus {
    /// Classify by absence: `Added` iff the client value is missing, `Removed`
    /// iff the bootstrap value is missing, `Changed` otherwise.
    pub fn from_presence(client_present: bool, bootstrap_present: bool) -> Self {
        match (client_present, bootstrap_present) {
            (false, _) => DiffStatus::Added,
            (true, false) => DiffStatus::Removed,
            (true, true) => DiffStatus::Changed,
        }
    }

    /// Short marker used in text output.
    pub fn marker(&self) -> char {
        match self {
            DiffStatus::Added => '+',
            DiffStatus::Removed => '-',
            DiffStatus::Changed => '~',
        }
    }
}

/// One leaf-level difference between the two user records.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiffEntry {
    /// Dotted path of the differing location
    pub path: String,
    pub status: DiffStatus,
    /// Client-side value, absent for `Added`
    pub client_value: Option<Value>,
    /// Bootstrap-side value, absent for `Removed`
    pub bootstrap_value: Option<Value>,
}

impl DiffEntry {
    /// Build an entry whose status follows from which sides are present.
    pub fn new(
        path: impl Into<String>,
        client_value: Option<Value>,
        bootstrap_value: Option<Value>,
    ) -> Self {
        Self {
            path: path.into(),
            status: DiffStatus::from_presence(client_value.is_some(), bootstrap_value.is_some()),
            client_value,
            bootstrap_value,
        }
    }
}
