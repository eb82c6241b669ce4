//! Base store contract and in-memory implementation
//!
//! The base store holds the ledger state a close cycle starts from. It
//! exposes reads and whole-batch application only; per-transaction mutation
//! goes through [`crate::ApplyContext`], which builds the batch.

use crate::entry::LedgerEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strata_core::Hash256;

/// An ordered set of entries flushed by one committing transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitBatch {
    entries: Vec<LedgerEntry>,
}

impl CommitBatch {
    /// Batch over arbitrary entries, ordered by index.
    pub fn from_entries(mut entries: Vec<LedgerEntry>) -> Self {
        entries.sort_by_key(LedgerEntry::index);
        Self { entries }
    }

    /// Batch over entries already in index order.
    pub(crate) fn from_ordered(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter()
    }

    /// Consume the batch in index order.
    pub fn into_entries(self) -> Vec<LedgerEntry> {
        self.entries
    }
}

/// Ledger state a transaction application reads from and commits into.
///
/// Implementations must be deterministic: `fetch` depends only on prior
/// `apply_batch` calls, and nothing here may consult time, randomness, or
/// unordered iteration.
pub trait EntryStore {
    /// Look up an entry by index. No side effects.
    fn fetch(&self, index: &Hash256) -> Option<LedgerEntry>;

    /// Whether an entry exists at `index`.
    fn contains(&self, index: &Hash256) -> bool {
        self.fetch(index).is_some()
    }

    /// Apply a committed batch. Entries replace any previous occupant of
    /// their index.
    fn apply_batch(&mut self, batch: CommitBatch);
}

/// Entry store held entirely in memory, ordered by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryStore {
    entries: BTreeMap<Hash256, LedgerEntry>,
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.values()
    }
}

impl EntryStore for InMemoryStore {
    fn fetch(&self, index: &Hash256) -> Option<LedgerEntry> {
        self.entries.get(index).cloned()
    }

    fn contains(&self, index: &Hash256) -> bool {
        self.entries.contains_key(index)
    }

    fn apply_batch(&mut self, batch: CommitBatch) {
        for entry in batch.into_entries() {
            self.entries.insert(entry.index(), entry);
        }
    }
}
