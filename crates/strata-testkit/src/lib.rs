#![forbid(unsafe_code)]
//! # Strata Testkit - Builders and Fixtures
//!
//! Test construction helpers shared across the workspace. Everything here
//! is deterministic; fixtures derive their content from the bytes callers
//! pass in, never from randomness.

/// Transaction builders
pub mod builders;

/// Store fixtures
pub mod fixtures;

pub use builders::TxBuilder;
pub use fixtures::{amendment_id, seeded_store, user_account};
