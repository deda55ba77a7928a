//! Subscriber installation for the `userrecon` binary
//!
//! All output goes to stderr: `userrecon check --format json` writes its
//! report to stdout and log lines must never be mixed into it.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// How log events are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Plain text at debug level (`userrecon -v`)
    Development,
    /// One JSON object per event at info level (`userrecon --log-json`)
    Production,
    /// Bare registry; tests add the capture layer themselves
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`.
///
/// Only the first call in a process takes effect. `RUST_LOG` replaces the
/// profile's default `userrecon=<level>` filter.
///
/// ```
/// use userrecon_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            let _ = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter("userrecon=debug"))
                .try_init();
        }
        Profile::Production => {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(filter("userrecon=info"))
                .try_init();
        }
        Profile::Test => {
            let _ = tracing_subscriber::registry().try_init();
        }
    });
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
