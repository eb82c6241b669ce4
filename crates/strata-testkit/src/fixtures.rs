//! Store fixtures

use strata_core::{AccountId, Hash256};
use strata_ledger::{GenesisConfig, InMemoryStore};

/// An amendment identifier with every byte set to `byte`.
pub fn amendment_id(byte: u8) -> Hash256 {
    Hash256::new([byte; 32])
}

/// A non-zero account identifier with every byte set to `byte`.
///
/// Panics on zero, which would be the protocol pseudo-account.
pub fn user_account(byte: u8) -> AccountId {
    assert_ne!(byte, 0, "user accounts must be non-zero");
    AccountId::new([byte; 20])
}

/// A store seeded from `genesis`.
pub fn seeded_store(genesis: &GenesisConfig) -> InMemoryStore {
    let mut store = InMemoryStore::new();
    genesis.seed(&mut store);
    store
}
