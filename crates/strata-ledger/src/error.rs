//! Error types
//!
//! A `LedgerError` reports a violated store invariant. These are programming
//! errors in the caller, not properties of transaction data: the pipeline
//! aborts the enclosing application instead of translating them into result
//! codes.

use crate::entry::EntryKind;
use strata_core::Hash256;
use thiserror::Error;

/// Store invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// `create` on an index that is already occupied
    #[error("entry already exists at {index}")]
    EntryExists {
        /// Occupied index
        index: Hash256,
    },

    /// Entry kind does not match the occupant or the requested kind
    #[error("entry kind mismatch at {index}: expected {expected}, found {found}")]
    KindMismatch {
        /// Index in question
        index: Hash256,
        /// Kind the caller asked for
        expected: EntryKind,
        /// Kind actually present
        found: EntryKind,
    },

    /// `modify` on an index never cached or created in this scope
    #[error("no entry known at {index}")]
    UnknownEntry {
        /// Unknown index
        index: Hash256,
    },
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

impl LedgerError {
    /// Build an `EntryExists` error.
    pub fn entry_exists(index: Hash256) -> Self {
        Self::EntryExists { index }
    }

    /// Build a `KindMismatch` error.
    pub fn kind_mismatch(index: Hash256, expected: EntryKind, found: EntryKind) -> Self {
        Self::KindMismatch {
            index,
            expected,
            found,
        }
    }

    /// Build an `UnknownEntry` error.
    pub fn unknown_entry(index: Hash256) -> Self {
        Self::UnknownEntry { index }
    }
}
