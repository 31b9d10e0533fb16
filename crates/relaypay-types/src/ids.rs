//! Identifiers used throughout RelayPay.
//!
//! Accounts are 20-byte addresses derived from secp256k1 public keys
//! (re-exported from `alloy-primitives`). Receipt IDs use UUIDv7 for
//! time-ordered lexicographic sorting.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 20-byte account identifier. The zero address is the distinguished
/// invalid account: records naming it as sender or recipient are skipped.
pub use alloy_primitives::Address;

/// 32-byte hash / signature scalar.
pub use alloy_primitives::B256;

/// 256-bit unsigned integer used for amounts and fees.
pub use alloy_primitives::U256;

/// Per-account replay counter. Starts at 0 for never-seen accounts and
/// advances by exactly one per committed record — no gaps, no repeats.
pub type Nonce = u64;

/// External monotonic clock value (block height). Authorizations carry an
/// expiry height beyond which they are void.
pub type BlockHeight = u64;

// ---------------------------------------------------------------------------
// ReceiptId
// ---------------------------------------------------------------------------

/// Globally unique settlement receipt identifier. Uses UUIDv7 so receipts
/// sort by issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ReceiptId(pub Uuid);

impl ReceiptId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "receipt:{}", self.0)
    }
}
