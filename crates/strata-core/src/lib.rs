//! # Strata Core - Foundational Ledger Types
//!
//! Foundational types shared by every layer of the Strata transaction engine:
//! identifiers, the transaction model, the canonical result taxonomy, and the
//! process-lifetime observability capability.
//!
//! ## Architecture
//!
//! - **hash**: 256-bit value type and deterministic label derivation
//! - **account**: account identifiers, including the protocol pseudo-account
//! - **tx**: the immutable transaction model handed to the apply pipeline
//! - **result**: the closed, totally ordered taxonomy of application outcomes
//! - **once**: process-lifetime lazy singleton guard
//! - **observability**: one-time logging initialization over the once guard
//!
//! Everything in this crate is deterministic: no wall-clock reads, no
//! randomness, and all collections that influence results iterate in a
//! defined order.

/// 256-bit hashes and deterministic index derivation
pub mod hash;

/// Account identifiers
pub mod account;

/// Transaction model
pub mod tx;

/// Result taxonomy for transaction application
pub mod result;

/// Process-lifetime lazy singleton guard
pub mod once;

/// Logging initialization
pub mod observability;

pub use account::AccountId;
pub use hash::{Hash256, ParseError};
pub use result::{ResultCategory, ResultCode};
pub use tx::{ChangeOp, Transaction, TxCommon, TxPayload};
