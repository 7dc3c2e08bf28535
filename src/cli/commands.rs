//! CLI definition and adapter for smart-crypto-lab.
//!
//! Maps the three recognized flags onto a [`PartialConfig`], builds the
//! application shell, and runs it once.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::app::SmartCryptoLab;
use crate::config::PartialConfig;
use crate::logging::Logger;

/// Write a SHA-256 checksum line for a file.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "smart-crypto-lab")]
#[command(about = "Write a sha256sum-compatible checksum line for an input file")]
#[command(version)]
#[command(
    long_about = "smart-crypto-lab hashes its input with SHA-256 and writes a sha256sum-compatible line.\n\nInput defaults to stdin and output to stdout.\n\nExample usage:\n  smart-crypto-lab -i data.bin -o data.bin.sha256 -v"
)]
pub struct Cli {
    /// Input file path (stdin when omitted).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path (stdout when omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the configuration handed to the shell.
    pub fn to_config(&self) -> PartialConfig {
        PartialConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            verbose: Some(self.verbose),
            ..PartialConfig::default()
        }
    }
}

/// Parse CLI arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the shell with the parsed arguments.
///
/// Only the binary entry point calls this. The processor's report is
/// discarded on success; any failure is returned for `main` to print.
pub async fn run_with_cli(cli: Cli, logger: Arc<dyn Logger>) -> anyhow::Result<()> {
    let mut lab = SmartCryptoLab::new(cli.to_config(), logger);
    lab.execute().await?;
    Ok(())
}
