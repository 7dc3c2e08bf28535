//! Processor collaborator driven by the application shell.
//!
//! A processor owns the actual work. The shell constructs one from the
//! normalized [`Config`](crate::config::Config), calls [`Processor::run`], and
//! passes the outcome through without inspecting it.

mod crypto;

pub use crypto::{CryptoProcessor, ProcessingReport};

use async_trait::async_trait;

/// A unit of asynchronous work parameterized by its constructed configuration.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Value produced on success. Opaque to the shell.
    type Output: Send;

    /// Failure type. Its `Display` output is the failure message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs the processor once.
    async fn run(&self) -> Result<Self::Output, Self::Error>;
}
