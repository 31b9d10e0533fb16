//! Settlement receipts for the RelayPay audit trail.
//!
//! Every committed record produces a [`SettlementReceipt`]. Receipts are the
//! per-record observability channel: the aggregate call result never reports
//! individual failures, so off-chain consumers reconcile against receipts
//! (or their absence) to learn which records settled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Address, Nonce, ReceiptId, U256};

/// Proof that one authorization record committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// Unique receipt identifier (UUIDv7, time-ordered).
    pub id: ReceiptId,
    /// Position of the record in its batch.
    pub index: usize,
    /// The debited party.
    pub sender: Address,
    /// The credited party.
    pub recipient: Address,
    /// Value moved to the recipient.
    pub amount: U256,
    /// Fee earned by the relayer for this record.
    pub relayer_fee: U256,
    /// The nonce this record consumed.
    pub nonce: Nonce,
    /// The relayer that submitted the batch.
    pub relayer: Address,
    /// When the engine committed the record.
    pub settled_at: DateTime<Utc>,
}
