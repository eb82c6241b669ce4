//! Variant dispatch and entry points
//!
//! The ledger-close driver hands each decoded transaction to
//! [`apply_transaction`]. Dispatch selects the transactor for the
//! transaction's variant, opens a scoped context over the store, runs the
//! pipeline, and retires the context before returning. Applying a batch is
//! strictly sequential: entries written by one transaction are visible to
//! the next in the same cycle.

use crate::change::ChangeTransactor;
use crate::error::Result;
use crate::pipeline;
use crate::transactor::Transactor;
use strata_core::{ResultCode, Transaction, TxPayload};
use strata_ledger::{ApplyContext, EntryStore, LedgerPhase};
use tracing::debug;

/// The transactor implementing a payload's variant family.
fn transactor_for(payload: &TxPayload) -> &'static dyn Transactor {
    match payload {
        TxPayload::Change(_) => &ChangeTransactor,
    }
}

/// Apply one transaction against `store`.
///
/// Returns the transaction's canonical outcome. The store is mutated only
/// when the outcome commits; on every other outcome, and on error, the
/// store is exactly as it was.
pub fn apply_transaction(
    store: &mut dyn EntryStore,
    tx: &Transaction,
    phase: LedgerPhase,
) -> Result<ResultCode> {
    let transactor = transactor_for(tx.payload());
    let ctx = ApplyContext::new(store, phase);
    let code = pipeline::run(transactor, tx, ctx)?;
    debug!(op = tx.payload().op_name(), result = %code, "Transaction processed");
    Ok(code)
}

/// Apply an ordered sequence of transactions, one context at a time.
///
/// Each transaction sees the state left by its predecessors. Returns one
/// code per transaction, in order. A store invariant violation aborts the
/// cycle at the offending transaction.
pub fn apply_sequence(
    store: &mut dyn EntryStore,
    txs: &[Transaction],
    phase: LedgerPhase,
) -> Result<Vec<ResultCode>> {
    let mut codes = Vec::with_capacity(txs.len());
    for tx in txs {
        codes.push(apply_transaction(store, tx, phase)?);
    }
    Ok(codes)
}
