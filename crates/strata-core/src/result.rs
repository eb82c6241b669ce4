//! Result taxonomy for transaction application
//!
//! Every transaction application produces exactly one `ResultCode`. The set
//! is closed: consensus peers bucket, log, and relay these codes, so a new
//! code is a protocol change, not a refactor.
//!
//! Codes keep their canonical wire names (`tesSUCCESS`, `tefALREADY`,
//! `temBAD_*`) for diagnostics. Pipeline logic never orders or compares
//! codes; it only asks [`ResultCode::is_success`]. The ordering on
//! [`ResultCategory`] exists for severity bucketing by observers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of applying one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    /// Transaction applied; mutations committed.
    Success,

    /// The requested state change already holds. Terminal no-op: nothing is
    /// committed, but the transaction is not malformed.
    AlreadyApplied,

    /// Source account is invalid for this transaction kind.
    BadSourceAccount,

    /// A signature or signing key is present where none is permitted.
    BadSignature,

    /// Sequence number is invalid for this transaction kind.
    BadSequence,

    /// Declared fee is invalid for this transaction kind.
    BadFee,

    /// The transaction cannot be applied in this execution context.
    Invalid,

    /// The operation tag is not recognized by this build.
    Unknown,
}

/// Severity class of a [`ResultCode`].
///
/// Ordered from least to most severe. `Retry` is reserved for outcomes that
/// depend on transient context; no governance code maps to it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ResultCategory {
    /// Applied and committed
    Success,
    /// Terminal no-op, nothing committed
    NoOp,
    /// Context-dependent failure, may succeed in a later context
    Retry,
    /// Invalid independent of ledger state, never retried
    Malformed,
}

impl ResultCode {
    /// Canonical wire name of this code.
    pub fn name(self) -> &'static str {
        match self {
            ResultCode::Success => "tesSUCCESS",
            ResultCode::AlreadyApplied => "tefALREADY",
            ResultCode::BadSourceAccount => "temBAD_SRC_ACCOUNT",
            ResultCode::BadSignature => "temBAD_SIGNATURE",
            ResultCode::BadSequence => "temBAD_SEQUENCE",
            ResultCode::BadFee => "temBAD_FEE",
            ResultCode::Invalid => "temINVALID",
            ResultCode::Unknown => "temUNKNOWN",
        }
    }

    /// Severity class of this code.
    pub fn category(self) -> ResultCategory {
        match self {
            ResultCode::Success => ResultCategory::Success,
            ResultCode::AlreadyApplied => ResultCategory::NoOp,
            ResultCode::BadSourceAccount
            | ResultCode::BadSignature
            | ResultCode::BadSequence
            | ResultCode::BadFee
            | ResultCode::Invalid
            | ResultCode::Unknown => ResultCategory::Malformed,
        }
    }

    /// Whether the pipeline proceeds past a stage returning this code.
    pub fn is_success(self) -> bool {
        self == ResultCode::Success
    }

    /// Whether scoped mutations are committed under this code.
    ///
    /// Only [`ResultCode::Success`] commits. In particular
    /// [`ResultCode::AlreadyApplied`] does not, even though it is not an
    /// error.
    pub fn commits(self) -> bool {
        self == ResultCode::Success
    }

    /// Whether this code can never change by re-presenting the transaction.
    pub fn is_malformed(self) -> bool {
        self.category() == ResultCategory::Malformed
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
