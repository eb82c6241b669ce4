//! Transaction model
//!
//! A transaction is immutable once constructed: the pipeline receives it by
//! shared reference and never writes through it. The common header carries
//! the fields every variant checks; the payload carries the variant-specific
//! operation.
//!
//! Governance pseudo-transactions are injected by the ledger-close process,
//! not submitted by account holders. They carry the zero account, no
//! signature, sequence zero, and fee zero; the `Change` transactor enforces
//! all four.

use crate::account::AccountId;
use crate::hash::Hash256;
use serde::{Deserialize, Serialize};

/// Fields common to every transaction variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxCommon {
    /// Source account. Zero for protocol pseudo-transactions.
    pub account: AccountId,
    /// Position in the source account's sequence space. Zero for
    /// pseudo-transactions, which belong to no account.
    pub sequence: u32,
    /// Declared fee in drops.
    pub fee: u64,
    /// Public signing key bytes. Empty for pseudo-transactions.
    pub signing_key: Vec<u8>,
    /// Signature bytes. Empty for pseudo-transactions.
    pub signature: Vec<u8>,
}

impl TxCommon {
    /// Header of a protocol pseudo-transaction: zero account, zero
    /// sequence, zero fee, no key material.
    pub fn pseudo() -> Self {
        Self {
            account: AccountId::ZERO,
            sequence: 0,
            fee: 0,
            signing_key: Vec::new(),
            signature: Vec::new(),
        }
    }
}

/// Variant-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxPayload {
    /// Protocol governance operation
    Change(ChangeOp),
}

impl TxPayload {
    /// Short operation name for diagnostics.
    pub fn op_name(&self) -> &'static str {
        match self {
            TxPayload::Change(ChangeOp::EnableAmendment { .. }) => "EnableAmendment",
            TxPayload::Change(ChangeOp::SetFee { .. }) => "SetFee",
            TxPayload::Change(ChangeOp::Unknown { .. }) => "Unknown",
        }
    }
}

/// Governance operations carried by a `Change` pseudo-transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeOp {
    /// Record an amendment as permanently active.
    EnableAmendment {
        /// Amendment identifier
        amendment: Hash256,
    },

    /// Replace the ledger-wide fee schedule.
    SetFee {
        /// Cost of the reference transaction, in drops
        base_fee: u64,
        /// Fee units consumed by the reference transaction
        reference_fee_units: u32,
        /// Account reserve, in drops
        reserve_base: u32,
        /// Per-owned-object reserve increment, in drops
        reserve_increment: u32,
    },

    /// A governance operation tag this build does not recognize.
    ///
    /// Decoders hand these through rather than failing so that every node,
    /// regardless of software version, reaches the same deterministic
    /// outcome for the same ledger.
    Unknown {
        /// Raw operation tag from the decoded transaction
        tag: u16,
    },
}

/// An immutable transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    common: TxCommon,
    payload: TxPayload,
}

impl Transaction {
    /// Assemble a transaction from its header and payload.
    pub fn new(common: TxCommon, payload: TxPayload) -> Self {
        Self { common, payload }
    }

    /// Source account.
    pub fn account(&self) -> AccountId {
        self.common.account
    }

    /// Sequence number.
    pub fn sequence(&self) -> u32 {
        self.common.sequence
    }

    /// Declared fee in drops.
    pub fn fee(&self) -> u64 {
        self.common.fee
    }

    /// Public signing key bytes.
    pub fn signing_key(&self) -> &[u8] {
        &self.common.signing_key
    }

    /// Signature bytes.
    pub fn signature(&self) -> &[u8] {
        &self.common.signature
    }

    /// Variant payload.
    pub fn payload(&self) -> &TxPayload {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_header_is_blank() {
        let common = TxCommon::pseudo();
        assert!(common.account.is_zero());
        assert_eq!(common.sequence, 0);
        assert_eq!(common.fee, 0);
        assert!(common.signing_key.is_empty());
        assert!(common.signature.is_empty());
    }

    #[test]
    fn op_names() {
        let tx = Transaction::new(
            TxCommon::pseudo(),
            TxPayload::Change(ChangeOp::EnableAmendment {
                amendment: Hash256::new([1; 32]),
            }),
        );
        assert_eq!(tx.payload().op_name(), "EnableAmendment");
    }
}
