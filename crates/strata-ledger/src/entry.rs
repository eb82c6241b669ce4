//! Ledger entries and their payloads
//!
//! Entries are typed records keyed by a 256-bit index. Singleton kinds
//! derive their index from a fixed domain-tag label, never from content, so
//! every node addresses the same entry without coordination. At most one
//! entry of each singleton kind exists; creation is lazy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use strata_core::Hash256;

/// The kinds of ledger entry this engine applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// The set of activated amendments
    Amendments,
    /// The ledger-wide fee schedule
    FeeSettings,
}

impl EntryKind {
    /// Domain-tag label this kind's singleton index derives from.
    fn label(self) -> &'static [u8] {
        match self {
            EntryKind::Amendments => b"strata/entry/amendments",
            EntryKind::FeeSettings => b"strata/entry/fee-settings",
        }
    }

    /// Deterministic singleton index for this kind.
    pub fn index(self) -> Hash256 {
        Hash256::derive(self.label())
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::Amendments => "Amendments",
            EntryKind::FeeSettings => "FeeSettings",
        };
        f.write_str(name)
    }
}

/// The set of activated amendment identifiers.
///
/// Activation is a one-way door: this type supports insertion and
/// membership, nothing removes an identifier. Storage is ordered, so
/// iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmendmentSet(BTreeSet<Hash256>);

impl AmendmentSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the amendment is active.
    pub fn contains(&self, amendment: &Hash256) -> bool {
        self.0.contains(amendment)
    }

    /// Record an amendment as active. Returns `false` if it already was,
    /// in which case the set is unchanged.
    pub fn insert(&mut self, amendment: Hash256) -> bool {
        self.0.insert(amendment)
    }

    /// Number of active amendments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no amendment is active.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Hash256> {
        self.0.iter()
    }
}

/// The ledger-wide fee schedule.
///
/// Updated only by full overwrite: a fee-change transaction replaces all
/// four fields at once, and there is no partial-field update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSettings {
    /// Cost of the reference transaction, in drops
    pub base_fee: u64,
    /// Fee units consumed by the reference transaction
    pub reference_fee_units: u32,
    /// Account reserve, in drops
    pub reserve_base: u32,
    /// Per-owned-object reserve increment, in drops
    pub reserve_increment: u32,
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self {
            base_fee: 10,
            reference_fee_units: 10,
            reserve_base: 200_000_000,
            reserve_increment: 50_000_000,
        }
    }
}

/// Typed payload of a ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryData {
    /// Activated amendments
    Amendments(AmendmentSet),
    /// Fee schedule
    FeeSettings(FeeSettings),
}

impl EntryData {
    /// Kind this payload belongs to.
    pub fn kind(&self) -> EntryKind {
        match self {
            EntryData::Amendments(_) => EntryKind::Amendments,
            EntryData::FeeSettings(_) => EntryKind::FeeSettings,
        }
    }

    /// Default-valued payload for a kind, used when an entry is created.
    pub fn default_for(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Amendments => EntryData::Amendments(AmendmentSet::new()),
            EntryKind::FeeSettings => EntryData::FeeSettings(FeeSettings::default()),
        }
    }
}

/// A typed, keyed ledger record.
///
/// The index is fixed at construction and the kind follows the payload, so
/// an entry whose kind disagrees with its data is unrepresentable. Only the
/// payload mutates, and only through the apply context's `cache`/`modify`
/// discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    index: Hash256,
    data: EntryData,
}

impl LedgerEntry {
    /// A default-valued entry of `kind` at `index`.
    pub fn new(kind: EntryKind, index: Hash256) -> Self {
        Self {
            index,
            data: EntryData::default_for(kind),
        }
    }

    /// Entry kind.
    pub fn kind(&self) -> EntryKind {
        self.data.kind()
    }

    /// Entry index.
    pub fn index(&self) -> Hash256 {
        self.index
    }

    /// Payload, read-only.
    pub fn data(&self) -> &EntryData {
        &self.data
    }

    /// Payload, mutable. The kind of the payload cannot change.
    pub fn data_mut(&mut self) -> &mut EntryData {
        &mut self.data
    }

    /// Amendment set view, if this is an `Amendments` entry.
    pub fn amendments(&self) -> Option<&AmendmentSet> {
        match &self.data {
            EntryData::Amendments(set) => Some(set),
            EntryData::FeeSettings(_) => None,
        }
    }

    /// Mutable amendment set view.
    pub fn amendments_mut(&mut self) -> Option<&mut AmendmentSet> {
        match &mut self.data {
            EntryData::Amendments(set) => Some(set),
            EntryData::FeeSettings(_) => None,
        }
    }

    /// Fee schedule view, if this is a `FeeSettings` entry.
    pub fn fees(&self) -> Option<&FeeSettings> {
        match &self.data {
            EntryData::FeeSettings(fees) => Some(fees),
            EntryData::Amendments(_) => None,
        }
    }

    /// Mutable fee schedule view.
    pub fn fees_mut(&mut self) -> Option<&mut FeeSettings> {
        match &mut self.data {
            EntryData::FeeSettings(fees) => Some(fees),
            EntryData::Amendments(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_indexes_are_stable_and_distinct() {
        assert_eq!(EntryKind::Amendments.index(), EntryKind::Amendments.index());
        assert_ne!(
            EntryKind::Amendments.index(),
            EntryKind::FeeSettings.index()
        );
    }

    #[test]
    fn amendment_insert_is_idempotent() {
        let mut set = AmendmentSet::new();
        let id = Hash256::new([0xAA; 32]);
        assert!(set.insert(id));
        assert!(!set.insert(id));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&id));
    }

    #[test]
    fn amendment_iteration_is_ordered() {
        let mut set = AmendmentSet::new();
        set.insert(Hash256::new([3; 32]));
        set.insert(Hash256::new([1; 32]));
        set.insert(Hash256::new([2; 32]));
        let order: Vec<_> = set.iter().copied().collect();
        assert_eq!(
            order,
            vec![
                Hash256::new([1; 32]),
                Hash256::new([2; 32]),
                Hash256::new([3; 32])
            ]
        );
    }

    #[test]
    fn new_entry_carries_default_payload() {
        let entry = LedgerEntry::new(EntryKind::FeeSettings, EntryKind::FeeSettings.index());
        assert_eq!(entry.fees(), Some(&FeeSettings::default()));
        assert!(entry.amendments().is_none());
    }
}
