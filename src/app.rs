//! Application shell: normalizes configuration, owns one processor, and runs it.
//!
//! [`SmartCryptoLab::execute`] is the single entry point. It logs a start line,
//! awaits the processor once, logs the outcome, and hands the processor's result
//! or error back unchanged.

use std::sync::Arc;

use crate::config::{Config, PartialConfig};
use crate::logging::Logger;
use crate::processor::{CryptoProcessor, Processor};

/// Name reported in the start line.
pub const APP_NAME: &str = "SmartCryptoLab";

/// Lifecycle of the most recent `execute()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Constructed, never executed.
    Idle,
    /// Awaiting the processor.
    Running,
    /// Last call returned the processor's result.
    Succeeded,
    /// Last call returned the processor's error.
    Failed,
}

/// Orchestrates one processor with a fixed configuration.
///
/// `execute` takes `&mut self`, so calls on one instance never overlap.
/// Sequential calls are allowed and run the processor again with the same
/// configuration.
pub struct SmartCryptoLab<P = CryptoProcessor> {
    config: Arc<Config>,
    processor: P,
    logger: Arc<dyn Logger>,
    state: AppState,
}

impl SmartCryptoLab<CryptoProcessor> {
    /// Creates a shell around the default checksum processor.
    ///
    /// The processor logs through the same `logger` as the shell.
    pub fn new(config: PartialConfig, logger: Arc<dyn Logger>) -> Self {
        let processor_logger = Arc::clone(&logger);
        Self::with_processor(config, logger, move |shared| {
            CryptoProcessor::new(shared, processor_logger)
        })
    }
}

impl<P: Processor> SmartCryptoLab<P> {
    /// Creates a shell around the processor returned by `build`.
    ///
    /// Debug logging is enabled before `build` runs when the normalized
    /// configuration asks for it.
    pub fn with_processor<F>(config: PartialConfig, logger: Arc<dyn Logger>, build: F) -> Self
    where
        F: FnOnce(Arc<Config>) -> P,
    {
        let config = Arc::new(Config::normalize(&config));

        if config.verbose {
            logger.enable_debug();
        }

        let processor = build(Arc::clone(&config));

        Self {
            config,
            processor,
            logger,
            state: AppState::Idle,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// Runs the processor once and returns its outcome unchanged.
    pub async fn execute(&mut self) -> Result<P::Output, P::Error> {
        self.logger.info(&format!("Starting {APP_NAME}"));
        self.state = AppState::Running;

        match self.processor.run().await {
            Ok(result) => {
                self.logger.info("Processing completed successfully");
                self.state = AppState::Succeeded;
                Ok(result)
            }
            Err(e) => {
                self.logger.error(&format!("Processing failed: {e}"));
                self.state = AppState::Failed;
                Err(e)
            }
        }
    }
}
