//! Structured logging for the reconciliation pipeline
//!
//! `init(profile)` installs the subscriber for the `userrecon` binary. The
//! `log_op_*!` macros bracket `reconcile` and `parse_metadata`, tagging every
//! event with the input digest so one run's events can be picked out. Tests
//! install [`init_test_capture`] instead and query what was emitted.
//!
//! # Usage
//!
//! ```rust
//! use userrecon_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
