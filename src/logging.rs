//! Logging capability handed to the application shell.
//!
//! The shell never touches a global logger directly. It receives an
//! `Arc<dyn Logger>` at construction, which lets tests substitute a capturing
//! fake. [`TracingLogger`] is the production implementation on top of
//! `tracing` and `tracing-subscriber`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Target attached to every line emitted through [`TracingLogger`].
const LOG_TARGET: &str = "smart_crypto_lab";

/// Filter installed once debug logging is switched on.
const DEBUG_FILTER: &str = "debug";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Sink for the shell's diagnostic output.
pub trait Logger: Send + Sync {
    /// Raises verbosity to debug. One-way; repeated calls are no-ops.
    fn enable_debug(&self);

    /// Whether [`Logger::enable_debug`] has been called.
    fn is_debug_enabled(&self) -> bool;

    fn info(&self, message: &str);

    fn error(&self, message: &str);

    fn debug(&self, message: &str);
}

/// [`Logger`] backed by the `tracing` macros.
///
/// Clones share the same debug switch and filter handle.
#[derive(Clone)]
pub struct TracingLogger {
    debug: Arc<AtomicBool>,
    handle: Option<FilterHandle>,
}

impl TracingLogger {
    /// Creates a logger that emits through whatever subscriber is already
    /// installed. `enable_debug` only flips the switch; it cannot change
    /// a filter it does not own.
    pub fn detached() -> Self {
        Self {
            debug: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    fn with_handle(handle: FilterHandle) -> Self {
        Self {
            debug: Arc::new(AtomicBool::new(false)),
            handle: Some(handle),
        }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::detached()
    }
}

impl Logger for TracingLogger {
    fn enable_debug(&self) {
        if self.debug.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(handle) = &self.handle {
            if let Err(e) = handle.reload(EnvFilter::new(DEBUG_FILTER)) {
                tracing::warn!(error = %e, "Failed to raise log level to debug");
                return;
            }
        }
        tracing::debug!("Debug logging enabled");
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug.load(Ordering::SeqCst)
    }

    fn info(&self, message: &str) {
        tracing::info!(target: LOG_TARGET, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: LOG_TARGET, "{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: LOG_TARGET, "{}", message);
    }
}

/// Installs the global subscriber and returns a logger that controls it.
///
/// Priority for the initial filter: `RUST_LOG` env var > "info". Output goes
/// to stderr so stdout stays free for processor output.
pub fn init() -> Result<TracingLogger, TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(TracingLogger::with_handle(handle))
}
