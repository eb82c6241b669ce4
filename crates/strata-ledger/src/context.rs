//! Scoped transactional view over a base store
//!
//! An [`ApplyContext`] is opened for exactly one transaction's application
//! and retired before the next begins. Mutations accumulate in an ordered
//! overlay that later stages of the same application can read back; the base
//! store is untouched until [`ApplyContext::commit`] flushes the overlay as
//! one batch. Dropping the context, or calling
//! [`ApplyContext::discard`], abandons every pending mutation as a unit.

use crate::entry::{EntryKind, LedgerEntry};
use crate::error::{LedgerError, Result};
use crate::store::{CommitBatch, EntryStore};
use std::collections::BTreeMap;
use strata_core::{AccountId, Hash256};

/// Which ledger a transaction is being applied against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerPhase {
    /// An open working ledger still accepting submissions
    Open,
    /// A closed ledger being finalized by consensus
    Closed,
}

/// Scoped, mutable view of ledger state for one transaction application.
pub struct ApplyContext<'a> {
    base: &'a mut dyn EntryStore,
    pending: BTreeMap<Hash256, LedgerEntry>,
    phase: LedgerPhase,
    source: Option<AccountId>,
}

impl<'a> ApplyContext<'a> {
    /// Open a context over `base` for a transaction applied in `phase`.
    pub fn new(base: &'a mut dyn EntryStore, phase: LedgerPhase) -> Self {
        Self {
            base,
            pending: BTreeMap::new(),
            phase,
            source: None,
        }
    }

    /// Phase this application runs in.
    pub fn phase(&self) -> LedgerPhase {
        self.phase
    }

    /// Record the resolved source account.
    pub fn set_source(&mut self, account: AccountId) {
        self.source = Some(account);
    }

    /// Source account, once a precheck has resolved it.
    pub fn source(&self) -> Option<AccountId> {
        self.source
    }

    /// Read-through lookup of the entry at `index`.
    ///
    /// Pending mutations from earlier stages of this application are
    /// visible. Absence is not an error; a mismatched kind at the index is a
    /// caller invariant violation.
    pub fn cache(&self, kind: EntryKind, index: Hash256) -> Result<Option<LedgerEntry>> {
        let found = match self.pending.get(&index) {
            Some(entry) => Some(entry.clone()),
            None => self.base.fetch(&index),
        };
        match found {
            Some(entry) if entry.kind() != kind => Err(LedgerError::kind_mismatch(
                index,
                kind,
                entry.kind(),
            )),
            other => Ok(other),
        }
    }

    /// Allocate a default-valued entry of `kind` at `index`.
    ///
    /// The new entry is part of this scope immediately. Fails if the index
    /// is occupied in the overlay or the base store; callers `cache` first.
    pub fn create(&mut self, kind: EntryKind, index: Hash256) -> Result<LedgerEntry> {
        if self.pending.contains_key(&index) || self.base.contains(&index) {
            return Err(LedgerError::entry_exists(index));
        }
        let entry = LedgerEntry::new(kind, index);
        self.pending.insert(index, entry.clone());
        Ok(entry)
    }

    /// Record a mutated entry into this scope.
    ///
    /// The entry must have been obtained through `cache` or `create` in this
    /// scope, and its kind must match the occupant being replaced.
    pub fn modify(&mut self, entry: LedgerEntry) -> Result<()> {
        let index = entry.index();
        let occupant_kind = match self.pending.get(&index) {
            Some(occupant) => Some(occupant.kind()),
            None => self.base.fetch(&index).map(|occupant| occupant.kind()),
        };
        match occupant_kind {
            None => Err(LedgerError::unknown_entry(index)),
            Some(kind) if kind != entry.kind() => {
                Err(LedgerError::kind_mismatch(index, kind, entry.kind()))
            }
            Some(_) => {
                self.pending.insert(index, entry);
                Ok(())
            }
        }
    }

    /// Number of entries pending in this scope.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Flush every pending mutation to the base store as one batch.
    ///
    /// Returns the number of entries written.
    pub fn commit(self) -> usize {
        let count = self.pending.len();
        if count > 0 {
            let entries = self.pending.into_values().collect();
            self.base.apply_batch(CommitBatch::from_ordered(entries));
        }
        count
    }

    /// Abandon every pending mutation. Equivalent to dropping the context.
    pub fn discard(self) {}
}
