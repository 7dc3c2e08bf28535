//! Command-line interface for smart-crypto-lab.
//!
//! Recognizes `--input`, `--output`, and `--verbose` and drives the
//! application shell once.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli};
