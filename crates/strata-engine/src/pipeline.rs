//! Stage driver with commit/rollback
//!
//! Runs the five stages in fixed order against one scoped context. The
//! first non-success code halts the run and is returned unmodified; no
//! stage's code is ever wrapped or translated. The context commits only on
//! success. Every other outcome, including the benign
//! [`ResultCode::AlreadyApplied`], discards the scope, so a failing
//! transaction can never leave a partial write behind.

use crate::error::Result;
use crate::transactor::Transactor;
use strata_core::{ResultCode, Transaction};
use strata_ledger::ApplyContext;
use tracing::{debug, trace};

/// Apply `tx` through `transactor` within `ctx`.
///
/// Consumes the context: it is committed on success and discarded on any
/// other outcome or error.
pub fn run(
    transactor: &dyn Transactor,
    tx: &Transaction,
    mut ctx: ApplyContext<'_>,
) -> Result<ResultCode> {
    let code = transactor.pre_check(tx, &mut ctx);
    if !code.is_success() {
        ctx.discard();
        return Ok(code);
    }
    trace!("pre_check passed");

    let code = transactor.check_signature(tx, &ctx);
    if !code.is_success() {
        ctx.discard();
        return Ok(code);
    }
    trace!("check_signature passed");

    let code = transactor.check_sequence(tx, &ctx);
    if !code.is_success() {
        ctx.discard();
        return Ok(code);
    }
    trace!("check_sequence passed");

    let code = transactor.collect_fee(tx, &ctx);
    if !code.is_success() {
        ctx.discard();
        return Ok(code);
    }
    trace!("collect_fee passed");

    // On `Err` the context unwinds with `?` and its overlay is dropped, so
    // an aborted application rolls back exactly like a failing one.
    let code = transactor.do_apply(tx, &mut ctx)?;

    if code.commits() {
        let entries = ctx.commit();
        debug!(entries, result = %code, "Transaction committed");
    } else {
        ctx.discard();
        debug!(result = %code, "Transaction not applied");
    }
    Ok(code)
}
