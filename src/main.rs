//! smart-crypto-lab CLI entry point.
//!
//! Initializes logging and delegates to the CLI module. A failure is returned
//! from `main`, which prints it to stderr and exits with status 1.

use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = smart_crypto_lab::cli::parse_cli();
    let logger = smart_crypto_lab::logging::init()?;

    smart_crypto_lab::cli::run_with_cli(cli, Arc::new(logger)).await
}
