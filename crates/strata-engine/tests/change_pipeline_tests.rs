//! End-to-end tests for the governance application pipeline
//!
//! Each test drives `apply_transaction` against an in-memory store and
//! checks both the returned code and the resulting ledger state. Rejection
//! tests also assert the store is byte-identical to its starting state.

use assert_matches::assert_matches;
use strata_core::{ResultCode, Transaction, TxPayload};
use strata_engine::{apply_sequence, apply_transaction, EngineError};
use strata_ledger::{
    ApplyContext, CommitBatch, EntryKind, EntryStore, FeeSettings, GenesisConfig, InMemoryStore,
    LedgerEntry, LedgerError, LedgerPhase,
};
use strata_testkit::{amendment_id, seeded_store, user_account, TxBuilder};

fn apply_closed(store: &mut InMemoryStore, tx: &Transaction) -> ResultCode {
    apply_transaction(store, tx, LedgerPhase::Closed).expect("store invariants hold")
}

#[test]
fn amendment_activation_then_duplicate() {
    let mut store = InMemoryStore::new();
    let tx = TxBuilder::enable_amendment(amendment_id(0xAA)).build();

    assert_eq!(apply_closed(&mut store, &tx), ResultCode::Success);

    let entry = store.fetch(&EntryKind::Amendments.index()).unwrap();
    let set = entry.amendments().unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.contains(&amendment_id(0xAA)));

    // Same transaction again: benign no-op, membership unchanged.
    assert_eq!(apply_closed(&mut store, &tx), ResultCode::AlreadyApplied);
    let entry = store.fetch(&EntryKind::Amendments.index()).unwrap();
    assert_eq!(entry.amendments().unwrap().len(), 1);
}

#[test]
fn amendment_already_active_from_genesis() {
    let genesis = GenesisConfig {
        amendments: vec![amendment_id(0x17)],
        ..GenesisConfig::default()
    };
    let mut store = seeded_store(&genesis);
    let before = store.clone();

    let tx = TxBuilder::enable_amendment(amendment_id(0x17)).build();
    assert_eq!(apply_closed(&mut store, &tx), ResultCode::AlreadyApplied);
    assert_eq!(store, before);
}

#[test]
fn distinct_amendments_accumulate() {
    let mut store = InMemoryStore::new();
    let txs = vec![
        TxBuilder::enable_amendment(amendment_id(1)).build(),
        TxBuilder::enable_amendment(amendment_id(2)).build(),
        TxBuilder::enable_amendment(amendment_id(1)).build(),
    ];

    let codes = apply_sequence(&mut store, &txs, LedgerPhase::Closed).unwrap();
    assert_eq!(
        codes,
        vec![
            ResultCode::Success,
            ResultCode::Success,
            ResultCode::AlreadyApplied
        ]
    );

    let entry = store.fetch(&EntryKind::Amendments.index()).unwrap();
    assert_eq!(entry.amendments().unwrap().len(), 2);
}

#[test]
fn fee_update_overwrites_all_fields() {
    let mut store = InMemoryStore::new();
    let first = TxBuilder::set_fee(10, 10, 200_000_000, 50_000_000).build();
    let second = TxBuilder::set_fee(12, 8, 100_000_000, 20_000_000).build();

    assert_eq!(apply_closed(&mut store, &first), ResultCode::Success);
    assert_eq!(apply_closed(&mut store, &second), ResultCode::Success);

    let fees = store
        .fetch(&EntryKind::FeeSettings.index())
        .and_then(|entry| entry.fees().copied())
        .unwrap();
    assert_eq!(
        fees,
        FeeSettings {
            base_fee: 12,
            reference_fee_units: 8,
            reserve_base: 100_000_000,
            reserve_increment: 20_000_000,
        }
    );
}

#[test]
fn identical_fee_updates_each_succeed() {
    let mut store = InMemoryStore::new();
    let tx = TxBuilder::set_fee(10, 10, 1, 1).build();
    assert_eq!(apply_closed(&mut store, &tx), ResultCode::Success);
    assert_eq!(apply_closed(&mut store, &tx), ResultCode::Success);
}

#[test]
fn unknown_operation_is_rejected_without_mutation() {
    let mut store = InMemoryStore::new();
    let before = store.clone();
    let tx = TxBuilder::unknown_change(0x7F00).build();

    assert_eq!(apply_closed(&mut store, &tx), ResultCode::Unknown);
    assert_eq!(store, before);
}

#[test]
fn precondition_rejections_are_exact_and_non_mutating() {
    let cases = vec![
        (
            TxBuilder::enable_amendment(amendment_id(3))
                .account(user_account(9))
                .build(),
            ResultCode::BadSourceAccount,
        ),
        (
            TxBuilder::enable_amendment(amendment_id(3))
                .signing_key(vec![1, 2, 3])
                .build(),
            ResultCode::BadSignature,
        ),
        (
            TxBuilder::enable_amendment(amendment_id(3))
                .signature(vec![9; 64])
                .build(),
            ResultCode::BadSignature,
        ),
        (
            TxBuilder::enable_amendment(amendment_id(3)).sequence(7).build(),
            ResultCode::BadSequence,
        ),
        (
            TxBuilder::set_fee(10, 10, 1, 1).fee(12).build(),
            ResultCode::BadFee,
        ),
    ];

    for (tx, expected) in cases {
        let mut store = seeded_store(&GenesisConfig::default());
        let before = store.clone();
        let code = apply_closed(&mut store, &tx);
        assert_eq!(code, expected, "payload {:?}", tx.payload().op_name());
        assert!(code.is_malformed());
        assert_eq!(store, before, "rejected transaction mutated the store");
    }
}

#[test]
fn open_ledger_application_is_invalid() {
    let mut store = InMemoryStore::new();
    let before = store.clone();
    let tx = TxBuilder::enable_amendment(amendment_id(4)).build();

    let code = apply_transaction(&mut store, &tx, LedgerPhase::Open).unwrap();
    assert_eq!(code, ResultCode::Invalid);
    assert_eq!(store, before);
}

#[test]
fn stage_order_is_load_bearing() {
    // Violates both the source-account rule and the sequence rule. The
    // earlier stage must win.
    let mut store = InMemoryStore::new();
    let tx = TxBuilder::enable_amendment(amendment_id(5))
        .account(user_account(1))
        .sequence(99)
        .build();
    assert_eq!(apply_closed(&mut store, &tx), ResultCode::BadSourceAccount);

    // Violates both the signature rule and the fee rule likewise.
    let tx = TxBuilder::enable_amendment(amendment_id(5))
        .signature(vec![1])
        .fee(10)
        .build();
    assert_eq!(apply_closed(&mut store, &tx), ResultCode::BadSignature);

    // An open ledger outranks everything after pre_check.
    let tx = TxBuilder::enable_amendment(amendment_id(5)).sequence(99).build();
    let code = apply_transaction(&mut store, &tx, LedgerPhase::Open).unwrap();
    assert_eq!(code, ResultCode::Invalid);
}

#[test]
fn aborted_application_leaves_no_trace() {
    // Poison the fee index with an entry of the wrong kind. The fee apply
    // hits a store invariant violation mid-apply and must abort without
    // writing anything.
    let mut store = InMemoryStore::new();
    let poisoned = LedgerEntry::new(EntryKind::Amendments, EntryKind::FeeSettings.index());
    store.apply_batch(CommitBatch::from_entries(vec![poisoned]));
    let before = store.clone();

    let tx = TxBuilder::set_fee(10, 10, 1, 1).build();
    let result = apply_transaction(&mut store, &tx, LedgerPhase::Closed);
    assert_matches!(
        result,
        Err(EngineError::Ledger(LedgerError::KindMismatch { .. }))
    );
    assert_eq!(store, before);
}

#[test]
fn failing_terminal_stage_discards_performed_mutations() {
    use strata_engine::Transactor;

    // A transactor that mutates the fee schedule and then reports failure.
    // The pipeline must throw the mutation away with the context.
    struct SabotagedFees;

    impl Transactor for SabotagedFees {
        fn pre_check(
            &self,
            _tx: &Transaction,
            _ctx: &mut ApplyContext<'_>,
        ) -> ResultCode {
            ResultCode::Success
        }

        fn check_signature(&self, _tx: &Transaction, _ctx: &ApplyContext<'_>) -> ResultCode {
            ResultCode::Success
        }

        fn check_sequence(&self, _tx: &Transaction, _ctx: &ApplyContext<'_>) -> ResultCode {
            ResultCode::Success
        }

        fn collect_fee(&self, _tx: &Transaction, _ctx: &ApplyContext<'_>) -> ResultCode {
            ResultCode::Success
        }

        fn do_apply(
            &self,
            _tx: &Transaction,
            ctx: &mut ApplyContext<'_>,
        ) -> Result<ResultCode, EngineError> {
            let index = EntryKind::FeeSettings.index();
            let mut entry = ctx.create(EntryKind::FeeSettings, index)?;
            entry.fees_mut().unwrap().base_fee = 999;
            ctx.modify(entry)?;
            Ok(ResultCode::Invalid)
        }
    }

    let mut store = InMemoryStore::new();
    let before = store.clone();
    let tx = TxBuilder::set_fee(10, 10, 1, 1).build();

    let ctx = ApplyContext::new(&mut store, LedgerPhase::Closed);
    let code = strata_engine::pipeline::run(&SabotagedFees, &tx, ctx).unwrap();
    assert_eq!(code, ResultCode::Invalid);
    assert_eq!(store, before);
}

#[test]
fn genesis_seeded_cycle_end_to_end() {
    let genesis = GenesisConfig::default();
    let mut store = seeded_store(&genesis);

    let txs = vec![
        TxBuilder::enable_amendment(amendment_id(0xAA)).build(),
        TxBuilder::set_fee(50, 10, 1_000_000, 250_000).build(),
    ];
    let codes = apply_sequence(&mut store, &txs, LedgerPhase::Closed).unwrap();
    assert_eq!(codes, vec![ResultCode::Success, ResultCode::Success]);

    let fees = store
        .fetch(&EntryKind::FeeSettings.index())
        .and_then(|entry| entry.fees().copied())
        .unwrap();
    assert_eq!(fees.base_fee, 50);

    let amendments = store.fetch(&EntryKind::Amendments.index()).unwrap();
    assert!(amendments.amendments().unwrap().contains(&amendment_id(0xAA)));
}

#[test]
fn payload_accessor_reports_change_ops() {
    let tx = TxBuilder::unknown_change(3).build();
    assert_matches!(tx.payload(), TxPayload::Change(_));
}
