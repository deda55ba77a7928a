//! Check command
//!
//! Usage: userrecon check [FILE] [--format text|json] [--all]

use super::input::InputArgs;
use clap::{Args, ValueEnum};
use userrecon_core::{reconcile, render_summary, ReconError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List every difference instead of only bootstrap-only fields
    #[arg(long)]
    pub all: bool,
}

/// Execute check command
///
/// Data-shape problems in the payload are part of the report, not failures.
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.input.load_config()?;
    let text = args.input.read_input()?;

    let result = reconcile(&text, &config);
    tracing::debug!(
        input_digest = result.input_digest.as_str(),
        rows = result.rows.len(),
        "check complete"
    );

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).map_err(ReconError::from)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let rows = if args.all {
                &result.differences
            } else {
                &result.rows
            };
            print!("{}", render_summary(&result, rows));
        }
    }

    Ok(())
}
