//! The batch settlement engine.
//!
//! One `settle` call processes N authorization records strictly in array
//! order, synchronously and sequentially. Each record either commits (nonce
//! advance + sender debit + recipient credit + fee accumulation) or skips
//! with zero writes; the batch always continues. Fees accumulate in a
//! running total and reach the relayer's balance in a single terminal
//! credit, so the relayer's balance is written at most once per call
//! regardless of batch size.
//!
//! Fatal conditions (oversized batch, charge overflow) surface before any
//! state change; the pre-call state is fully preserved.

use chrono::Utc;
use relaypay_ledger::Ledger;
use relaypay_types::{
    Address, AuthorizationRecord, BlockHeight, EngineConfig, Nonce, ReceiptId, RecordOutcome,
    RelaypayError, Result, SettlementReceipt, SettlementReport, SkipReason, U256,
};

use crate::nonce_registry::NonceRegistry;
use crate::verifier::recover_signer;

/// Validates and settles relayer-submitted authorization batches.
///
/// The engine owns the nonce registry and its own identity (the
/// `ledger_identity` bound into every signing digest). The balance store is
/// injected per call, so the engine can run against any [`Ledger`]
/// implementation.
///
/// `settle` takes `&mut self` and `&mut L`: exclusive whole-call execution
/// is enforced by ownership, matching the single-threaded atomic model the
/// validation rules assume.
#[derive(Debug)]
pub struct SettlementEngine {
    /// This engine's address, folded into every digest. A record signed for
    /// a different engine never verifies here.
    identity: Address,
    /// Per-account replay counters.
    nonces: NonceRegistry,
    /// Tunables.
    config: EngineConfig,
}

impl SettlementEngine {
    /// Create an engine with default configuration.
    #[must_use]
    pub fn new(identity: Address) -> Self {
        Self::with_config(identity, EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    #[must_use]
    pub fn with_config(identity: Address, config: EngineConfig) -> Self {
        Self {
            identity,
            nonces: NonceRegistry::new(),
            config,
        }
    }

    /// The identity bound into every signing digest.
    #[must_use]
    pub fn identity(&self) -> Address {
        self.identity
    }

    /// Read query: last committed nonce for an account, 0 if never seen.
    #[must_use]
    pub fn nonce_of(&self, account: Address) -> Nonce {
        self.nonces.current(account)
    }

    /// Settle a batch on behalf of `relayer` at chain height `current_block`.
    ///
    /// Returns a [`SettlementReport`] on success — including the degenerate
    /// case where every record skipped. Skipped records never surface as
    /// errors; callers reconcile against the report (or the emitted tracing
    /// events).
    ///
    /// # Errors
    /// - [`RelaypayError::BatchTooLarge`] if the batch exceeds the
    ///   configured cap
    /// - [`RelaypayError::ChargeOverflow`] if any record's
    ///   `amount + relayer_fee` overflows
    /// - [`RelaypayError::FeeAccumulationOverflow`] if the fee total
    ///   overflows (unreachable against a supply-conserving ledger)
    /// - any error the [`Ledger`] primitives raise
    pub fn settle<L: Ledger>(
        &mut self,
        ledger: &mut L,
        records: &[AuthorizationRecord],
        relayer: Address,
        current_block: BlockHeight,
    ) -> Result<SettlementReport> {
        if records.len() > self.config.max_batch_records {
            return Err(RelaypayError::BatchTooLarge {
                len: records.len(),
                max: self.config.max_batch_records,
            });
        }

        // Overflow pre-pass: every fatal arithmetic condition must surface
        // before the first write, so an abort leaves pre-call state intact.
        let mut charges = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            charges.push(
                record
                    .charge()
                    .ok_or(RelaypayError::ChargeOverflow { index })?,
            );
        }

        let mut outcomes = Vec::with_capacity(records.len());
        let mut receipts = Vec::new();
        let mut fee_total = U256::ZERO;

        for (index, record) in records.iter().enumerate() {
            let outcome =
                self.evaluate(ledger, record, charges[index], relayer, current_block)?;
            match outcome {
                RecordOutcome::Committed { nonce } => {
                    fee_total = fee_total
                        .checked_add(record.relayer_fee)
                        .ok_or(RelaypayError::FeeAccumulationOverflow)?;
                    receipts.push(SettlementReceipt {
                        id: ReceiptId::new(),
                        index,
                        sender: record.sender,
                        recipient: record.recipient,
                        amount: record.amount,
                        relayer_fee: record.relayer_fee,
                        nonce,
                        relayer,
                        settled_at: Utc::now(),
                    });
                    tracing::info!(
                        index,
                        sender = %record.sender,
                        recipient = %record.recipient,
                        amount = %record.amount,
                        fee = %record.relayer_fee,
                        nonce,
                        "record committed"
                    );
                }
                RecordOutcome::Skipped(reason) => {
                    tracing::debug!(index, sender = %record.sender, %reason, "record skipped");
                }
            }
            outcomes.push(outcome);
        }

        // Single terminal write to the relayer's balance.
        ledger.credit(relayer, fee_total)?;

        let report = SettlementReport {
            outcomes,
            receipts,
            fee_total,
        };
        tracing::info!(
            records = records.len(),
            committed = report.committed_count(),
            skipped = report.skipped_count(),
            fee_total = %report.fee_total,
            %relayer,
            "batch settled"
        );
        Ok(report)
    }

    /// Evaluate one record: skip checks in spec order, then commit.
    ///
    /// The commit writes are indivisible relative to any observer: the
    /// engine holds exclusive access to both stores for the whole call, and
    /// the ledger primitives cannot fail once the balance pre-check passed.
    fn evaluate<L: Ledger>(
        &mut self,
        ledger: &mut L,
        record: &AuthorizationRecord,
        charge: U256,
        relayer: Address,
        current_block: BlockHeight,
    ) -> Result<RecordOutcome> {
        // The nonce the signer must have committed to: derived from registry
        // state at evaluation time, never caller-supplied.
        let candidate_nonce = self.nonces.current(record.sender) + 1;

        if record.sender == Address::ZERO {
            return Ok(RecordOutcome::Skipped(SkipReason::ZeroSender));
        }
        if record.recipient == Address::ZERO {
            return Ok(RecordOutcome::Skipped(SkipReason::ZeroRecipient));
        }
        if current_block > record.expiry_block {
            return Ok(RecordOutcome::Skipped(SkipReason::Expired {
                expiry_block: record.expiry_block,
                current_block,
            }));
        }
        let available = ledger.balance_of(record.sender);
        if available < charge {
            return Ok(RecordOutcome::Skipped(SkipReason::InsufficientBalance {
                needed: charge,
                available,
            }));
        }
        let digest = record.signing_digest(candidate_nonce, self.identity, relayer);
        let recovered = recover_signer(digest, record.sig_v, record.sig_r, record.sig_s);
        if recovered != Some(record.sender) {
            return Ok(RecordOutcome::Skipped(SkipReason::SignatureMismatch {
                recovered,
            }));
        }

        self.nonces.advance(record.sender);
        ledger.debit(record.sender, charge)?;
        ledger.credit(record.recipient, record.amount)?;
        Ok(RecordOutcome::Committed {
            nonce: candidate_nonce,
        })
    }
}
