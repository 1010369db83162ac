//! json-check CLI - Command-line interface for the validation hook

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::mods::{ExitStatus, Validator, VersionParsingMode};

#[derive(Parser, Debug)]
#[command(name = "json-check", version)]
#[command(about = "Validate relaxed JSON files and mod.json version/changelog consistency", long_about = None)]
pub struct Cli {
    /// Files to validate, checked in the order given.
    /// Names starting with `-` are taken as files unless they match a flag;
    /// put files after `--` to be sure.
    #[arg(allow_hyphen_values = true)]
    pub files: Vec<PathBuf>,

    /// Compare versions by their digit runs instead of requiring X.Y or X.Y.Z
    #[arg(long)]
    pub lenient: bool,

    /// Only print files that fail
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Version parsing mode selected by the flags
    #[must_use]
    pub fn mode(&self) -> VersionParsingMode {
        if self.lenient {
            VersionParsingMode::Lenient
        } else {
            VersionParsingMode::Strict
        }
    }

    /// Validate every file, printing one line per file to stdout
    #[must_use]
    pub fn execute(&self) -> ExitStatus {
        let validator = Validator::new(self.mode());
        validator.validate_batch_with_callback(&self.files, &|outcome| {
            if !(self.quiet && outcome.passed()) {
                println!("{outcome}");
            }
        })
    }
}

/// Run the json-check CLI
///
/// # Errors
/// Returns an error if logging cannot be set up. File failures are reported
/// through the returned status, never as an error.
pub fn run_cli() -> anyhow::Result<ExitStatus> {
    // Setup logging (stderr, so stdout only carries result lines)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set up logging: {e}"))?;

    let cli = Cli::parse();
    Ok(cli.execute())
}
