//! Core types shared across userrecon facilities
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging facility in `userrecon-core` and by the CLI.

pub mod schema;
