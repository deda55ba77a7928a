//! Sanitize command
//!
//! Usage: userrecon sanitize [FILE]

use super::input::InputArgs;
use clap::Args;
use userrecon_core::json::parse_payload;
use userrecon_core::metadata::parse_metadata;

#[derive(Debug, Args)]
pub struct SanitizeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute sanitize command
pub fn execute(args: SanitizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.input.load_config()?;
    let text = args.input.read_input()?;

    let payload = parse_payload(&text)?;
    let bootstrap = parse_metadata(&payload, &config);

    match (&bootstrap.sanitized, &bootstrap.error) {
        (Some(sanitized), err) => {
            println!("{}", sanitized);
            // the string is still worth showing when it fails to parse
            if let Some(err) = err {
                eprintln!("warning: {}", err);
            }
            Ok(())
        }
        (None, Some(err)) => Err(err.clone().into()),
        (None, None) => Ok(()),
    }
}
