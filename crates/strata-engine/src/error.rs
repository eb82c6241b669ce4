//! Error types

use strata_ledger::LedgerError;
use thiserror::Error;

/// Fatal conditions during transaction application.
///
/// These are caller bugs, not transaction outcomes: the application that hit
/// one is aborted, its scoped mutations are discarded, and no result code is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The entry store contract was violated
    #[error("ledger store invariant violated: {0}")]
    Ledger(#[from] LedgerError),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
