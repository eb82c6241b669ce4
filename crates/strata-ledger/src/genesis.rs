//! Genesis configuration
//!
//! The starting contents of the singleton entries: the initial fee schedule
//! and any amendments active from ledger one. Operators supply this as TOML;
//! the engine seeds a fresh store from the validated value before any
//! transaction applies.

use crate::entry::{AmendmentSet, EntryData, EntryKind, FeeSettings, LedgerEntry};
use crate::store::{CommitBatch, EntryStore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strata_core::Hash256;
use thiserror::Error;

/// Genesis configuration problems.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Configuration file could not be read
    #[error("failed to read genesis file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration was not valid TOML
    #[error("failed to parse genesis config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field failed validation
    #[error("invalid genesis field '{field}': {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

/// Initial contents of the singleton ledger entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Initial fee schedule
    #[serde(default)]
    pub fees: FeeSettings,

    /// Amendments active from the first ledger
    #[serde(default)]
    pub amendments: Vec<Hash256>,
}

impl GenesisConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, GenesisError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, GenesisError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check field-level invariants.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.fees.base_fee == 0 {
            return Err(GenesisError::Invalid {
                field: "fees.base_fee",
                reason: "must be non-zero".to_owned(),
            });
        }
        if self.fees.reference_fee_units == 0 {
            return Err(GenesisError::Invalid {
                field: "fees.reference_fee_units",
                reason: "must be non-zero".to_owned(),
            });
        }
        let mut seen = AmendmentSet::new();
        for amendment in &self.amendments {
            if amendment.is_zero() {
                return Err(GenesisError::Invalid {
                    field: "amendments",
                    reason: "the zero identifier is not a valid amendment".to_owned(),
                });
            }
            if !seen.insert(*amendment) {
                return Err(GenesisError::Invalid {
                    field: "amendments",
                    reason: format!("duplicate amendment {amendment}"),
                });
            }
        }
        Ok(())
    }

    /// Write the configured singleton entries into `store`.
    ///
    /// The fee schedule entry is always written. The amendments entry is
    /// written only when amendments are configured, matching the lazy
    /// creation the governance transactor performs.
    pub fn seed(&self, store: &mut dyn EntryStore) {
        let mut entries = Vec::new();

        if !self.amendments.is_empty() {
            let mut set = AmendmentSet::new();
            for amendment in &self.amendments {
                set.insert(*amendment);
            }
            let mut entry =
                LedgerEntry::new(EntryKind::Amendments, EntryKind::Amendments.index());
            *entry.data_mut() = EntryData::Amendments(set);
            entries.push(entry);
        }

        let mut fee_entry =
            LedgerEntry::new(EntryKind::FeeSettings, EntryKind::FeeSettings.index());
        *fee_entry.data_mut() = EntryData::FeeSettings(self.fees);
        entries.push(fee_entry);

        tracing::debug!(entries = entries.len(), "Seeding genesis entries");
        store.apply_batch(CommitBatch::from_entries(entries));
    }
}
