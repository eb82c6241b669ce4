//! Transaction builders
//!
//! [`TxBuilder`] starts from a well-formed pseudo-transaction and lets a
//! test break exactly one precondition at a time.

use strata_core::{AccountId, ChangeOp, Hash256, Transaction, TxCommon, TxPayload};

/// Builder over a pseudo-transaction header and a governance payload.
#[derive(Debug, Clone)]
pub struct TxBuilder {
    common: TxCommon,
    op: ChangeOp,
}

impl TxBuilder {
    /// A well-formed amendment activation.
    pub fn enable_amendment(amendment: Hash256) -> Self {
        Self {
            common: TxCommon::pseudo(),
            op: ChangeOp::EnableAmendment { amendment },
        }
    }

    /// A well-formed fee-schedule replacement.
    pub fn set_fee(
        base_fee: u64,
        reference_fee_units: u32,
        reserve_base: u32,
        reserve_increment: u32,
    ) -> Self {
        Self {
            common: TxCommon::pseudo(),
            op: ChangeOp::SetFee {
                base_fee,
                reference_fee_units,
                reserve_base,
                reserve_increment,
            },
        }
    }

    /// A governance operation with an unrecognized tag.
    pub fn unknown_change(tag: u16) -> Self {
        Self {
            common: TxCommon::pseudo(),
            op: ChangeOp::Unknown { tag },
        }
    }

    /// Set the source account.
    pub fn account(mut self, account: AccountId) -> Self {
        self.common.account = account;
        self
    }

    /// Set the sequence number.
    pub fn sequence(mut self, sequence: u32) -> Self {
        self.common.sequence = sequence;
        self
    }

    /// Set the declared fee.
    pub fn fee(mut self, fee: u64) -> Self {
        self.common.fee = fee;
        self
    }

    /// Set the signing key bytes.
    pub fn signing_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.common.signing_key = key.into();
        self
    }

    /// Set the signature bytes.
    pub fn signature(mut self, signature: impl Into<Vec<u8>>) -> Self {
        self.common.signature = signature.into();
        self
    }

    /// Finish the transaction.
    pub fn build(self) -> Transaction {
        Transaction::new(self.common, TxPayload::Change(self.op))
    }
}
