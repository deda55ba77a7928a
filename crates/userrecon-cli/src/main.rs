//! userrecon CLI
//!
//! Command-line interface for client/bootstrap user reconciliation

use clap::{Parser, Subcommand};
use userrecon_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "userrecon")]
#[command(about = "userrecon - Compare client and bootstrap user identities", long_about = None)]
struct Cli {
    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON logs on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reconcile a payload and show the differences
    Check(commands::check::CheckArgs),
    /// Show the sanitized metadata string of a payload
    Sanitize(commands::sanitize::SanitizeArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        init(Profile::Production);
    } else if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Sanitize(args) => commands::sanitize::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
