//! Default processor: writes a SHA-256 checksum line for the input.
//!
//! Reads the configured input (stdin when absent), hashes it, and writes a
//! `sha256sum`-compatible line to the configured output (stdout when absent).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::Processor;
use crate::config::Config;
use crate::error::ProcessError;
use crate::logging::Logger;
use crate::utils::{checksum_line, sha256_hex, STDIN_NAME};

/// Summary of one successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingReport {
    /// Input path, `None` for stdin.
    pub input: Option<PathBuf>,
    /// Output path, `None` for stdout.
    pub output: Option<PathBuf>,
    /// Bytes consumed from the input.
    pub bytes_read: usize,
    /// Bytes written to the output.
    pub bytes_written: usize,
    /// Hex SHA-256 digest of the input.
    pub sha256: String,
}

/// Checksum processor built from the shell's configuration.
///
/// Diagnostics go through the injected [`Logger`], the same one the shell uses.
#[derive(Clone)]
pub struct CryptoProcessor {
    config: Arc<Config>,
    logger: Arc<dyn Logger>,
}

impl CryptoProcessor {
    /// Creates a processor sharing the shell's configuration and logger.
    pub fn new(config: Arc<Config>, logger: Arc<dyn Logger>) -> Self {
        Self { config, logger }
    }

    /// Returns the configuration this processor was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fails with [`ProcessError::SameFile`] when the output resolves to the input.
    ///
    /// Missing output directories are created first so the comparison sees the
    /// real location, including `..` components through them.
    async fn ensure_distinct_paths(&self) -> Result<(), ProcessError> {
        let (Some(input), Some(output)) = (&self.config.input, &self.config.output) else {
            return Ok(());
        };

        let output_location = resolve_output(output).await?;
        let input_location = tokio::fs::canonicalize(input)
            .await
            .unwrap_or_else(|_| input.clone());

        if input_location == output_location {
            return Err(ProcessError::SameFile {
                path: output.clone(),
            });
        }
        Ok(())
    }

    async fn read_input(&self) -> Result<Vec<u8>, ProcessError> {
        match &self.config.input {
            Some(path) => tokio::fs::read(path)
                .await
                .map_err(|source| ProcessError::Read {
                    path: path.clone(),
                    source,
                }),
            None => {
                let mut buf = Vec::new();
                tokio::io::stdin()
                    .read_to_end(&mut buf)
                    .await
                    .map_err(ProcessError::ReadStdin)?;
                Ok(buf)
            }
        }
    }

    async fn write_output(&self, data: &[u8]) -> Result<(), ProcessError> {
        match &self.config.output {
            Some(path) => {
                let write_err = |source| ProcessError::Write {
                    path: path.clone(),
                    source,
                };
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
                }
                tokio::fs::write(path, data).await.map_err(write_err)
            }
            None => {
                let mut stdout = tokio::io::stdout();
                stdout
                    .write_all(data)
                    .await
                    .map_err(ProcessError::WriteStdout)?;
                stdout.flush().await.map_err(ProcessError::WriteStdout)
            }
        }
    }
}

#[async_trait]
impl Processor for CryptoProcessor {
    type Output = ProcessingReport;
    type Error = ProcessError;

    async fn run(&self) -> Result<ProcessingReport, ProcessError> {
        self.ensure_distinct_paths().await?;

        let content = self.read_input().await?;
        let name = self
            .config
            .input
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| STDIN_NAME.to_string());

        let sha256 = sha256_hex(&content);
        self.logger.debug(&format!(
            "Hashed input {name}: {} bytes, sha256 {sha256}",
            content.len()
        ));

        let line = checksum_line(&sha256, &name);
        self.write_output(line.as_bytes()).await?;
        self.logger
            .debug(&format!("Wrote checksum line: {} bytes", line.len()));

        Ok(ProcessingReport {
            input: self.config.input.clone(),
            output: self.config.output.clone(),
            bytes_read: content.len(),
            bytes_written: line.len(),
            sha256,
        })
    }
}

/// Resolves where writing to `path` would land.
///
/// An existing file is canonicalized directly, which also follows a symlink in
/// the last component. Otherwise the parent directories are created and the
/// canonical parent is joined with the file name.
async fn resolve_output(path: &Path) -> Result<PathBuf, ProcessError> {
    if let Ok(resolved) = tokio::fs::canonicalize(path).await {
        return Ok(resolved);
    }

    let Some(file_name) = path.file_name() else {
        return Ok(path.to_path_buf());
    };
    let write_err = |source| ProcessError::Write {
        path: path.to_path_buf(),
        source,
    };
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    let parent = tokio::fs::canonicalize(parent).await.map_err(write_err)?;
    Ok(parent.join(file_name))
}
