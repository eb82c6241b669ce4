#![forbid(unsafe_code)]
//! # Strata Ledger - Entry Store and Scoped Application State
//!
//! Ledger state visible to transaction application: typed entries keyed by
//! deterministic 256-bit indexes, a base store contract, and the scoped
//! [`ApplyContext`] through which all transaction-time mutation flows.
//!
//! ## Mutation discipline
//!
//! Transactors never touch the base store. They `cache` an entry out of the
//! context by value, mutate their copy, and hand it back with `modify`. The
//! context accumulates mutations in an overlay; the pipeline driver either
//! commits the overlay as one batch or discards it whole. Partial writes are
//! unrepresentable.
//!
//! ## Determinism
//!
//! Every collection in this crate iterates in key order (`BTreeMap` and
//! `BTreeSet` throughout), so any serialization or replay a collaborator
//! performs sees identical sequences on every node.

/// Ledger entries and their payloads
pub mod entry;

/// Base store contract and in-memory implementation
pub mod store;

/// Scoped transactional view over a base store
pub mod context;

/// Genesis configuration
pub mod genesis;

/// Error types
pub mod error;

pub use context::{ApplyContext, LedgerPhase};
pub use entry::{AmendmentSet, EntryData, EntryKind, FeeSettings, LedgerEntry};
pub use error::LedgerError;
pub use genesis::{GenesisConfig, GenesisError};
pub use store::{CommitBatch, EntryStore, InMemoryStore};
