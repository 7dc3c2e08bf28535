//! Error types for SmartCryptoLab operations.
//!
//! Defines the error types for the library layer:
//! - Configuration parsing
//! - Processor I/O (input, output, stdin, stdout)
//!
//! The application shell never classifies or wraps these; they reach the
//! caller exactly as the processor produced them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while the default processor runs.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin")]
    ReadStdin(#[source] std::io::Error),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write stdout")]
    WriteStdout(#[source] std::io::Error),

    #[error("refusing to overwrite input file: {}", path.display())]
    SameFile { path: PathBuf },
}
