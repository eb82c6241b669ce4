//! Logging initialization
//!
//! The apply pipeline emits leveled `tracing` events for diagnostics and
//! never reads anything back from the logging layer, so log output can never
//! influence a transaction result.
//!
//! The global subscriber is installed at most once per process, behind the
//! [`Lazy`] guard. Libraries and tests may call [`init`] freely; later calls
//! observe the handle constructed by the first.

use crate::once::Lazy;

/// Filter applied when `STRATA_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Record of the one-time logging installation.
#[derive(Debug)]
pub struct LogHandle {
    filter: String,
    installed: bool,
}

impl LogHandle {
    /// The env-filter directive string in effect.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether this process's global subscriber was installed here.
    ///
    /// `false` means an embedding application had already installed its own
    /// subscriber, which then receives our events.
    pub fn installed(&self) -> bool {
        self.installed
    }
}

static LOG: Lazy<LogHandle> = Lazy::new(|| {
    let filter =
        std::env::var("STRATA_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned());
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter.clone())
        .try_init()
        .is_ok();
    LogHandle { filter, installed }
});

/// Install the process-wide logging subscriber if nobody has yet.
///
/// Filtering follows the `STRATA_LOG` environment variable, falling back to
/// [`DEFAULT_LOG_FILTER`]. Returns the shared handle; the handle is never
/// torn down.
pub fn init() -> &'static LogHandle {
    LOG.get()
}
