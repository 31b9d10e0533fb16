//! End-to-end integration tests across the full settlement path.
//!
//! These tests exercise the whole pipeline: wire columns -> authorization
//! records -> per-record validation -> ledger mutation -> relayer
//! compensation, in realistic multi-originator scenarios, and verify the
//! system-level properties: nonce monotonicity, balance conservation,
//! skip isolation, and replay/forgery resistance.

#![allow(clippy::too_many_arguments)]

use alloy_primitives::{B256, eip191_hash_message};
use k256::ecdsa::SigningKey;
use relaypay_engine::{BatchColumns, SettlementEngine};
use relaypay_ledger::{InMemoryLedger, Ledger};
use relaypay_types::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relaypay=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// An off-chain originator: holds a key, signs authorization records.
struct Wallet {
    key: SigningKey,
    address: Address,
}

impl Wallet {
    fn random() -> Self {
        let key = SigningKey::random(&mut rand::thread_rng());
        let address = Address::from_public_key(key.verifying_key());
        Self { key, address }
    }

    fn authorize(
        &self,
        recipient: Address,
        amount: u64,
        fee: u64,
        expiry_block: BlockHeight,
        nonce: Nonce,
        engine_identity: Address,
        relayer: Address,
    ) -> AuthorizationRecord {
        let mut record = AuthorizationRecord {
            sender: self.address,
            recipient,
            amount: U256::from(amount),
            relayer_fee: U256::from(fee),
            expiry_block,
            sig_v: 0,
            sig_r: B256::ZERO,
            sig_s: B256::ZERO,
        };
        let digest = record.signing_digest(nonce, engine_identity, relayer);
        let message_hash = eip191_hash_message(digest);
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(message_hash.as_slice())
            .expect("signing should succeed");
        record.sig_r = B256::from_slice(sig.r().to_bytes().as_slice());
        record.sig_s = B256::from_slice(sig.s().to_bytes().as_slice());
        record.sig_v = 27 + recid.to_byte();
        record
    }
}

fn columns_from(records: &[AuthorizationRecord]) -> BatchColumns {
    BatchColumns {
        senders: records.iter().map(|r| r.sender).collect(),
        recipients: records.iter().map(|r| r.recipient).collect(),
        amounts: records.iter().map(|r| r.amount).collect(),
        relayer_fees: records.iter().map(|r| r.relayer_fee).collect(),
        expiry_blocks: records.iter().map(|r| r.expiry_block).collect(),
        sig_v: records.iter().map(|r| r.sig_v).collect(),
        sig_r: records.iter().map(|r| r.sig_r).collect(),
        sig_s: records.iter().map(|r| r.sig_s).collect(),
    }
}

const BLOCK: BlockHeight = 1_000;

// =============================================================================
// Test: a relayer batches authorizations from many originators
// =============================================================================
#[test]
fn e2e_multi_originator_batch() {
    init_tracing();
    let mut engine = SettlementEngine::new(Address::repeat_byte(0xee));
    let mut ledger = InMemoryLedger::new();
    let relayer = Address::repeat_byte(0xff);

    let alice = Wallet::random();
    let bob = Wallet::random();
    let carol = Wallet::random();
    let dave = Address::repeat_byte(0xda);

    ledger.mint(alice.address, U256::from(1_000u64)).unwrap();
    ledger.mint(bob.address, U256::from(500u64)).unwrap();
    ledger.mint(carol.address, U256::from(200u64)).unwrap();
    let supply_before = ledger.total_supply();

    let identity = engine.identity();
    let records = vec![
        alice.authorize(dave, 100, 5, BLOCK + 50, 1, identity, relayer),
        bob.authorize(alice.address, 50, 2, BLOCK + 50, 1, identity, relayer),
        carol.authorize(dave, 30, 1, BLOCK + 50, 1, identity, relayer),
        alice.authorize(bob.address, 10, 1, BLOCK + 50, 2, identity, relayer),
    ];

    // Round-trip through the wire format, as a real relayer submission would.
    let pivoted = columns_from(&records).into_records().unwrap();
    assert_eq!(pivoted, records);

    let report = engine
        .settle(&mut ledger, &pivoted, relayer, BLOCK)
        .unwrap();

    assert_eq!(report.committed_count(), 4);
    assert_eq!(report.fee_total, U256::from(9u64));

    // Per-account outcomes.
    assert_eq!(
        ledger.balance_of(alice.address),
        U256::from(1_000u64 - 100 - 5 + 50 - 10 - 1)
    );
    assert_eq!(
        ledger.balance_of(bob.address),
        U256::from(500u64 - 50 - 2 + 10)
    );
    assert_eq!(
        ledger.balance_of(carol.address),
        U256::from(200u64 - 30 - 1)
    );
    assert_eq!(ledger.balance_of(dave), U256::from(130u64));
    assert_eq!(ledger.balance_of(relayer), U256::from(9u64));

    // Nonces advanced exactly per committed record.
    assert_eq!(engine.nonce_of(alice.address), 2);
    assert_eq!(engine.nonce_of(bob.address), 1);
    assert_eq!(engine.nonce_of(carol.address), 1);

    // Value moved, never created or destroyed.
    assert_eq!(ledger.total_supply(), supply_before);
    ledger.verify_supply().unwrap();
}

// =============================================================================
// Test: skips are isolated — good records settle around bad ones
// =============================================================================
#[test]
fn e2e_mixed_batch_skip_isolation() {
    init_tracing();
    let mut engine = SettlementEngine::new(Address::repeat_byte(0xee));
    let mut ledger = InMemoryLedger::new();
    let relayer = Address::repeat_byte(0xff);

    let alice = Wallet::random();
    let bob = Wallet::random();
    let dave = Address::repeat_byte(0xda);
    ledger.mint(alice.address, U256::from(100u64)).unwrap();
    ledger.mint(bob.address, U256::from(100u64)).unwrap();

    let identity = engine.identity();
    let records = vec![
        // expired
        alice.authorize(dave, 10, 1, BLOCK - 1, 1, identity, relayer),
        // good
        bob.authorize(dave, 10, 1, BLOCK + 50, 1, identity, relayer),
        // unaffordable
        alice.authorize(dave, 500, 1, BLOCK + 50, 1, identity, relayer),
        // good — alice's first commit, so still nonce 1
        alice.authorize(dave, 10, 1, BLOCK + 50, 1, identity, relayer),
    ];

    let report = engine.settle(&mut ledger, &records, relayer, BLOCK).unwrap();

    assert_eq!(report.committed_count(), 2);
    assert!(matches!(
        report.outcomes[0],
        RecordOutcome::Skipped(SkipReason::Expired { .. })
    ));
    assert!(report.outcomes[1].is_committed());
    assert!(matches!(
        report.outcomes[2],
        RecordOutcome::Skipped(SkipReason::InsufficientBalance { .. })
    ));
    assert!(report.outcomes[3].is_committed());

    assert_eq!(ledger.balance_of(dave), U256::from(20u64));
    assert_eq!(ledger.balance_of(relayer), U256::from(2u64));
    assert_eq!(engine.nonce_of(alice.address), 1);
    assert_eq!(engine.nonce_of(bob.address), 1);
    ledger.verify_supply().unwrap();
}

// =============================================================================
// Test: a batch stolen by a competing relayer is worthless
// =============================================================================
#[test]
fn e2e_front_running_relayer_earns_nothing() {
    init_tracing();
    let mut engine = SettlementEngine::new(Address::repeat_byte(0xee));
    let mut ledger = InMemoryLedger::new();
    let honest_relayer = Address::repeat_byte(0xff);
    let front_runner = Address::repeat_byte(0xfe);

    let alice = Wallet::random();
    let dave = Address::repeat_byte(0xda);
    ledger.mint(alice.address, U256::from(100u64)).unwrap();

    let record = alice.authorize(dave, 10, 1, BLOCK + 50, 1, engine.identity(), honest_relayer);

    // The front-runner grabs the batch from the mempool and submits it as
    // its own: every record skips on signature mismatch.
    let stolen = engine
        .settle(&mut ledger, std::slice::from_ref(&record), front_runner, BLOCK)
        .unwrap();
    assert!(stolen.is_noop());
    assert_eq!(ledger.balance_of(front_runner), U256::ZERO);
    assert_eq!(ledger.balance_of(alice.address), U256::from(100u64));

    // The honest relayer's later submission still settles: nothing moved.
    let honest = engine
        .settle(&mut ledger, &[record], honest_relayer, BLOCK)
        .unwrap();
    assert_eq!(honest.committed_count(), 1);
    assert_eq!(ledger.balance_of(honest_relayer), U256::from(1u64));
    assert_eq!(ledger.balance_of(dave), U256::from(10u64));
}

// =============================================================================
// Test: same-sender ordering — commits chain, skips cascade
// =============================================================================
#[test]
fn e2e_same_sender_nonce_cascade() {
    init_tracing();
    let mut engine = SettlementEngine::new(Address::repeat_byte(0xee));
    let mut ledger = InMemoryLedger::new();
    let relayer = Address::repeat_byte(0xff);

    let alice = Wallet::random();
    let dave = Address::repeat_byte(0xda);
    ledger.mint(alice.address, U256::from(60u64)).unwrap();

    let identity = engine.identity();
    // Three chained authorizations: 1 and 2 are affordable, after which
    // alice's balance (60 - 22 - 22 = 16) cannot cover the third.
    let records = vec![
        alice.authorize(dave, 20, 2, BLOCK + 50, 1, identity, relayer),
        alice.authorize(dave, 20, 2, BLOCK + 50, 2, identity, relayer),
        alice.authorize(dave, 20, 2, BLOCK + 50, 3, identity, relayer),
    ];

    let report = engine.settle(&mut ledger, &records, relayer, BLOCK).unwrap();

    assert!(report.outcomes[0].is_committed());
    assert!(report.outcomes[1].is_committed());
    assert!(matches!(
        report.outcomes[2],
        RecordOutcome::Skipped(SkipReason::InsufficientBalance { .. })
    ));
    assert_eq!(engine.nonce_of(alice.address), 2);

    // After the two commits the derived candidate for alice is exactly 3,
    // so the skipped record settles on resubmission once she can afford it.
    ledger.mint(alice.address, U256::from(10u64)).unwrap();
    let retry = engine
        .settle(&mut ledger, &records[2..], relayer, BLOCK)
        .unwrap();
    assert_eq!(retry.committed_count(), 1);
    assert_eq!(engine.nonce_of(alice.address), 3);
    ledger.verify_supply().unwrap();
}

// =============================================================================
// Test: wire-format violations abort the whole call
// =============================================================================
#[test]
fn e2e_malformed_wire_batch_is_fatal() {
    init_tracing();
    let engine = SettlementEngine::new(Address::repeat_byte(0xee));
    let relayer = Address::repeat_byte(0xff);

    let alice = Wallet::random();
    let record = alice.authorize(
        Address::repeat_byte(0xda),
        10,
        1,
        BLOCK + 50,
        1,
        engine.identity(),
        relayer,
    );
    let mut columns = columns_from(std::slice::from_ref(&record));
    columns.sig_s.clear();

    let err = columns.into_records().unwrap_err();
    assert!(matches!(
        err,
        RelaypayError::ColumnLengthMismatch {
            column: "sig_s",
            expected: 1,
            actual: 0,
        }
    ));
}

// =============================================================================
// Test: an engine with a different identity rejects foreign records
// =============================================================================
#[test]
fn e2e_cross_engine_replay_rejected() {
    init_tracing();
    let mut engine_a = SettlementEngine::new(Address::repeat_byte(0xe1));
    let mut engine_b = SettlementEngine::new(Address::repeat_byte(0xe2));
    let mut ledger_a = InMemoryLedger::new();
    let mut ledger_b = InMemoryLedger::new();
    let relayer = Address::repeat_byte(0xff);

    let alice = Wallet::random();
    let dave = Address::repeat_byte(0xda);
    ledger_a.mint(alice.address, U256::from(100u64)).unwrap();
    ledger_b.mint(alice.address, U256::from(100u64)).unwrap();

    // Signed for engine A.
    let record = alice.authorize(dave, 10, 1, BLOCK + 50, 1, engine_a.identity(), relayer);

    // Settles on A.
    let on_a = engine_a
        .settle(&mut ledger_a, std::slice::from_ref(&record), relayer, BLOCK)
        .unwrap();
    assert_eq!(on_a.committed_count(), 1);

    // Replayed against engine B: signature mismatch, nothing moves.
    let on_b = engine_b
        .settle(&mut ledger_b, &[record], relayer, BLOCK)
        .unwrap();
    assert!(on_b.is_noop());
    assert_eq!(ledger_b.balance_of(alice.address), U256::from(100u64));
}
