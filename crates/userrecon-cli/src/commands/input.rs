//! Input and configuration arguments shared by every command

use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use userrecon_core::{ReconError, ReconcileConfig};

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Payload file (default: stdin)
    pub file: Option<PathBuf>,

    /// TOML configuration overriding the built-in defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Read the payload text from the file or stdin
    pub fn read_input(&self) -> Result<String, ReconError> {
        match &self.file {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }

    /// Load the configuration file, or the defaults when none is given
    pub fn load_config(&self) -> Result<ReconcileConfig, ReconError> {
        match &self.config {
            Some(path) => ReconcileConfig::load(path),
            None => Ok(ReconcileConfig::default()),
        }
    }
}
