//! Per-record settlement outcomes.
//!
//! Every record in a batch terminates in exactly one of two states:
//! `COMMITTED` (nonce advanced, balances moved) or `SKIPPED` (zero writes).
//! Skips never abort the call — one bad record must not punish the other
//! N-1 — so they are modeled as values, not errors. The whole-call fatal
//! class lives in [`RelaypayError`](crate::RelaypayError).

use serde::{Deserialize, Serialize};

use crate::{Address, BlockHeight, Nonce, SettlementReceipt, U256};

/// Why a record was excluded from settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The sender is the zero address.
    ZeroSender,
    /// The recipient is the zero address.
    ZeroRecipient,
    /// The current block height has passed the record's expiry.
    Expired {
        expiry_block: BlockHeight,
        current_block: BlockHeight,
    },
    /// The sender cannot cover `amount + relayer_fee`.
    InsufficientBalance { needed: U256, available: U256 },
    /// Signature recovery failed or recovered an address other than the
    /// claimed sender. Also the terminal state of a same-sender cascade:
    /// when an earlier record from this sender skipped, the derived nonce
    /// no longer matches what this record's signer committed to.
    SignatureMismatch { recovered: Option<Address> },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroSender => write!(f, "ZERO_SENDER"),
            Self::ZeroRecipient => write!(f, "ZERO_RECIPIENT"),
            Self::Expired {
                expiry_block,
                current_block,
            } => write!(f, "EXPIRED (expiry {expiry_block}, current {current_block})"),
            Self::InsufficientBalance { needed, available } => {
                write!(f, "INSUFFICIENT_BALANCE (need {needed}, have {available})")
            }
            Self::SignatureMismatch { recovered: Some(addr) } => {
                write!(f, "SIGNATURE_MISMATCH (recovered {addr})")
            }
            Self::SignatureMismatch { recovered: None } => {
                write!(f, "SIGNATURE_MISMATCH (unrecoverable)")
            }
        }
    }
}

/// Terminal state of one record evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordOutcome {
    /// All writes applied: nonce advance, sender debit, recipient credit,
    /// fee accumulated.
    Committed {
        /// The nonce this record consumed.
        nonce: Nonce,
    },
    /// Zero writes applied; the batch continued past this record.
    Skipped(SkipReason),
}

impl RecordOutcome {
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// The result of one `settle` call: per-record outcomes in batch order,
/// receipts for every committed record, and the fee total credited to the
/// relayer in the single terminal write.
///
/// The aggregate call result is always success once this report exists;
/// callers that need to know *which* records committed read it from here
/// (or from the tracing events the engine emits).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReport {
    /// One outcome per input record, index-aligned with the batch.
    pub outcomes: Vec<RecordOutcome>,
    /// Audit-trail receipts, one per committed record.
    pub receipts: Vec<SettlementReceipt>,
    /// Sum of `relayer_fee` over committed records.
    pub fee_total: U256,
}

impl SettlementReport {
    /// Number of records that committed.
    #[must_use]
    pub fn committed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_committed()).count()
    }

    /// Number of records that were skipped.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.committed_count()
    }

    /// A degenerate but valid call where nothing committed.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.committed_count() == 0
    }
}
