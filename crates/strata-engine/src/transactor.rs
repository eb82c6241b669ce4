//! Five-stage application contract
//!
//! Every transaction variant implements the same ordered stages. Each stage
//! is a pure function of the transaction and the scoped context; the driver
//! in [`crate::pipeline`] halts at the first stage that returns anything
//! other than success, and that code is the transaction's final outcome.
//!
//! Stage order is load-bearing. A transaction that violates several
//! preconditions at once must report the code of the earliest stage that
//! catches it, on every node, or peers would disagree about ledger
//! contents.

use crate::error::Result;
use strata_core::{ResultCode, Transaction};
use strata_ledger::ApplyContext;

/// One transaction variant's application rules.
///
/// Implementations are stateless: everything an application needs lives in
/// the transaction and the context.
pub trait Transactor {
    /// Structural gating before any other validation.
    ///
    /// Resolves the source account into the context. This is the only stage
    /// besides [`Transactor::do_apply`] permitted to mutate the context.
    fn pre_check(&self, tx: &Transaction, ctx: &mut ApplyContext<'_>) -> ResultCode;

    /// Validate the signature fields.
    fn check_signature(&self, tx: &Transaction, ctx: &ApplyContext<'_>) -> ResultCode;

    /// Validate the sequence number.
    fn check_sequence(&self, tx: &Transaction, ctx: &ApplyContext<'_>) -> ResultCode;

    /// Validate and charge the declared fee.
    fn collect_fee(&self, tx: &Transaction, ctx: &ApplyContext<'_>) -> ResultCode;

    /// Perform the variant-specific state change.
    ///
    /// A returned [`ResultCode`] is the transaction's outcome; an error is a
    /// violated store invariant and aborts the application.
    fn do_apply(&self, tx: &Transaction, ctx: &mut ApplyContext<'_>) -> Result<ResultCode>;
}
