//! Governance transactor
//!
//! Applies protocol-governance pseudo-transactions: amendment activations
//! and fee-schedule replacements. Pseudo-transactions are statements of
//! protocol fact agreed by quorum and injected at ledger close, not
//! authenticated economic acts. They therefore carry no economic sender, no
//! signature, no sequence, and no fee, and every precheck here enforces
//! that shape.
//!
//! The two mutations are deliberately asymmetric. Amendment activation is a
//! one-time, irreversible event, so it is an idempotent set-insert that
//! reports [`ResultCode::AlreadyApplied`] for a member. The fee schedule is
//! live configuration, so it is an unconditional full overwrite and
//! repeated identical updates each succeed.

use crate::error::Result;
use crate::transactor::Transactor;
use strata_core::{ChangeOp, Hash256, ResultCode, Transaction, TxPayload};
use strata_ledger::{ApplyContext, EntryKind, FeeSettings, LedgerError, LedgerPhase};
use tracing::{debug, info, warn};

/// Transactor for `Change` pseudo-transactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeTransactor;

impl Transactor for ChangeTransactor {
    fn pre_check(&self, tx: &Transaction, ctx: &mut ApplyContext<'_>) -> ResultCode {
        let account = tx.account();
        ctx.set_source(account);

        if !account.is_zero() {
            warn!(account = %account, "Change transaction has a bad source account");
            return ResultCode::BadSourceAccount;
        }

        // Pseudo-transactions are injected at ledger close by consensus,
        // never accepted into an open working ledger.
        if ctx.phase() == LedgerPhase::Open {
            warn!("Change transaction against an open ledger");
            return ResultCode::Invalid;
        }

        ResultCode::Success
    }

    // The source account is checked again here on purpose. Both checks are
    // consensus-critical; neither may be removed in favor of the other.
    fn check_signature(&self, tx: &Transaction, _ctx: &ApplyContext<'_>) -> ResultCode {
        if !tx.account().is_zero() {
            warn!(account = %tx.account(), "Change transaction has a bad source account");
            return ResultCode::BadSourceAccount;
        }

        if !tx.signing_key().is_empty() || !tx.signature().is_empty() {
            warn!("Change transaction has a bad signature");
            return ResultCode::BadSignature;
        }

        ResultCode::Success
    }

    fn check_sequence(&self, tx: &Transaction, _ctx: &ApplyContext<'_>) -> ResultCode {
        if tx.sequence() != 0 {
            warn!(sequence = tx.sequence(), "Change transaction has a bad sequence");
            return ResultCode::BadSequence;
        }
        ResultCode::Success
    }

    fn collect_fee(&self, tx: &Transaction, _ctx: &ApplyContext<'_>) -> ResultCode {
        if tx.fee() != 0 {
            warn!(fee = tx.fee(), "Change transaction with non-zero fee");
            return ResultCode::BadFee;
        }
        ResultCode::Success
    }

    fn do_apply(&self, tx: &Transaction, ctx: &mut ApplyContext<'_>) -> Result<ResultCode> {
        let TxPayload::Change(op) = tx.payload();
        match op {
            ChangeOp::EnableAmendment { amendment } => apply_amendment(*amendment, ctx),
            ChangeOp::SetFee {
                base_fee,
                reference_fee_units,
                reserve_base,
                reserve_increment,
            } => apply_fee(
                FeeSettings {
                    base_fee: *base_fee,
                    reference_fee_units: *reference_fee_units,
                    reserve_base: *reserve_base,
                    reserve_increment: *reserve_increment,
                },
                ctx,
            ),
            ChangeOp::Unknown { tag } => {
                warn!(tag, "Change transaction with unknown operation");
                Ok(ResultCode::Unknown)
            }
        }
    }
}

fn apply_amendment(amendment: Hash256, ctx: &mut ApplyContext<'_>) -> Result<ResultCode> {
    let index = EntryKind::Amendments.index();
    let mut entry = match ctx.cache(EntryKind::Amendments, index)? {
        Some(entry) => entry,
        None => ctx.create(EntryKind::Amendments, index)?,
    };

    let set = entry.amendments_mut().ok_or_else(|| {
        LedgerError::kind_mismatch(index, EntryKind::Amendments, EntryKind::FeeSettings)
    })?;

    if set.contains(&amendment) {
        return Ok(ResultCode::AlreadyApplied);
    }

    set.insert(amendment);
    ctx.modify(entry)?;

    debug!(amendment = %amendment, "Amendment activated");
    Ok(ResultCode::Success)
}

fn apply_fee(fees: FeeSettings, ctx: &mut ApplyContext<'_>) -> Result<ResultCode> {
    let index = EntryKind::FeeSettings.index();
    let mut entry = match ctx.cache(EntryKind::FeeSettings, index)? {
        Some(entry) => entry,
        None => ctx.create(EntryKind::FeeSettings, index)?,
    };

    let current = entry.fees_mut().ok_or_else(|| {
        LedgerError::kind_mismatch(index, EntryKind::FeeSettings, EntryKind::Amendments)
    })?;

    info!(previous = ?current, "Previous fee settings");
    *current = fees;
    ctx.modify(entry)?;

    info!(new = ?fees, "New fee settings");
    warn!("Fees have been changed");
    Ok(ResultCode::Success)
}
