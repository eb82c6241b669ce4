#![forbid(unsafe_code)]
//! # Strata Engine - Transaction Application Pipeline
//!
//! The deterministic pipeline that decides whether a candidate transaction
//! is admissible against a ledger and, if so, mutates ledger state exactly
//! once. Every validating node computes byte-identical results from
//! identical inputs; the pipeline is therefore a pure function of the
//! transaction and the starting ledger state, with no time, randomness, or
//! unordered iteration anywhere on the apply path.
//!
//! ## Architecture
//!
//! - **transactor**: the five-stage contract every transaction variant
//!   implements
//! - **pipeline**: the driver that runs the stages in fixed order and
//!   commits or discards the scoped context
//! - **change**: the governance variant, applying amendment activations and
//!   fee-schedule replacements
//! - **engine**: variant dispatch and the per-close-cycle entry points
//!
//! ## Outcome handling
//!
//! Transaction-data problems are [`ResultCode`]s and flow back to the
//! ledger-close driver unmodified. Violated store invariants are
//! [`EngineError`]s: they indicate a bug in the calling code, abort the
//! enclosing application, and never surface as a transaction outcome.
//!
//! [`ResultCode`]: strata_core::ResultCode

/// Five-stage application contract
pub mod transactor;

/// Stage driver with commit/rollback
pub mod pipeline;

/// Governance transactor
pub mod change;

/// Variant dispatch and entry points
pub mod engine;

/// Error types
pub mod error;

pub use change::ChangeTransactor;
pub use engine::{apply_sequence, apply_transaction};
pub use error::EngineError;
pub use transactor::Transactor;
