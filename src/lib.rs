//! smart_crypto_lab: async application shell around a checksum processor.
//!
//! [`SmartCryptoLab`] normalizes a [`PartialConfig`], owns one [`Processor`],
//! and exposes `execute()` as its single entry point. Logging is an injected
//! [`Logger`] capability; the command-line adapter in [`cli`] is only wired up
//! by the binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod processor;
pub mod utils;

pub use app::{AppState, SmartCryptoLab, APP_NAME};
pub use config::{Config, PartialConfig};
pub use error::{ConfigError, ProcessError};
pub use logging::{Logger, TracingLogger};
pub use processor::{CryptoProcessor, ProcessingReport, Processor};
